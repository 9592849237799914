use crate::error::SweepError;

pub fn exit_code_for_error(err: &SweepError) -> i32 {
    match err {
        SweepError::Config(_) => 2,
        SweepError::UnsupportedBrowser(_) => 4,
        SweepError::Io(_) => 23,
        SweepError::Json(_) => 26,
        SweepError::DatabaseNotFound(_) => 37,
        SweepError::RegistryUnreadable(_) => 39,
        SweepError::ContainerNotFound(_) => 40,
        SweepError::DatabaseAccess(_) => 43,
    }
}
