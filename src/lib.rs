pub mod cmdline_utils;
pub mod errors;
pub mod field; // Prime field arithmetic with a runtime modulus
pub mod loader; // Table files and point literals
pub mod poly_utils; // Chi tables and multilinear extensions
pub mod utils; // Utils in general
