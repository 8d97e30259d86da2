fn main() {
    // ESP-IDF link arguments; firmware builds only.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
