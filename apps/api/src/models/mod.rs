pub mod career;
pub mod profile;
