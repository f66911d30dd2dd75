//! Entry point for the WASM application

pub fn main() {
    traceability_frontend::run_app();
}
