//! # Storefront Entry Point
//!
//! Starts the text storefront on the terminal.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr)
//! 2. Load configuration from the environment
//! 3. Load the product catalog
//! 4. Create the cart store
//! 5. Run the shell until `quit` or end of input

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The actual setup is in lib.rs for better testability
    storefront::run()
}
