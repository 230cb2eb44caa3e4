pub mod cli;
pub mod ctx;
pub mod discover;
pub mod io;
pub mod math;
pub mod params;
pub mod pipeline;
pub mod schema;
pub mod scores;
