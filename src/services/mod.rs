pub mod recommendations;
pub mod sampling;

pub use recommendations::similar_movies;
pub use sampling::random_movies;
