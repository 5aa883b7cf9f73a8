use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocationError {
    #[error(
        "please specify the location by using any of the following flags: \
         --city, --postal with --country, --latitude with --longitude"
    )]
    InvalidCombination,
}
