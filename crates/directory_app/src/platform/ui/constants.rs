pub const TITLE: &str = "Candidate Management: search and filter candidates";
pub const ALL_JOBS: &str = "All Jobs";
pub const EMPTY_TABLE: &str = "(no candidates)";
pub const HEADER_ROW: &str = "#";
pub const HEADER_NAME: &str = "Name";
pub const HEADER_JOB: &str = "Job";
pub const HEADER_SKILLS: &str = "Skills";
pub const MAX_CELL_WIDTH: usize = 40;
