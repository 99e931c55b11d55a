#[cfg(test)]
pub mod common {
    use std::sync::Once;

    static INIT: Once = Once::new();

    pub fn before_each() {
        INIT.call_once(|| {
            std::env::set_var("RUST_LOG", "INFO");
            env_logger::init();
        });
    }
}
