pub mod company;
pub mod skills;
