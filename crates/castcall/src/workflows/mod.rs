pub mod access;
pub mod casting;
pub mod dashboard;
pub mod jobs;
pub mod notify;
pub mod storage;
