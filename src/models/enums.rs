use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// The string form doubles as the serde representation.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(AppointmentStatus {
    Pending => "Pendiente",
    Confirmed => "Confirmada",
    Cancelled => "Cancelada",
});

str_enum!(Role {
    Admin => "Admin",
    Receptionist => "Recepcionista",
    Doctor => "Medico",
});

/// Badge colour class shown next to an appointment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTag {
    Ok,
    Err,
    Warn,
}

impl StatusTag {
    /// Confirmed is `ok`, cancelled is `err`, pending or absent is `warn`.
    pub fn for_status(status: Option<AppointmentStatus>) -> Self {
        match status {
            Some(AppointmentStatus::Confirmed) => Self::Ok,
            Some(AppointmentStatus::Cancelled) => Self::Err,
            _ => Self::Warn,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Err => "err",
            Self::Warn => "warn",
        }
    }
}
