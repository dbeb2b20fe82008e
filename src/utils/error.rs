use thiserror::Error;

#[derive(Error, Debug)]
pub enum ElevatorError {
    #[error("floor {floor} is out of range (1..={total_floors})")]
    FloorOutOfRange { floor: u32, total_floors: u32 },

    #[error("no suitable elevator found")]
    NoElevatorAvailable,

    #[error("invalid value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ElevatorError>;
