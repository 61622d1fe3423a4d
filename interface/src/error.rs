use std::fmt;

/// Custom error codes returned by the `prereq` program.
#[repr(u32)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, strum_macros::FromRepr, strum_macros::EnumIter)]
pub enum PrereqError {
    PreReqTsNotCompleted = 6000,
    PreReqTsAlreadyCompleted = 6001,
    PreReqRsAlreadyCompleted = 6002,
    PreReqRsNotInTimeWindow = 6003,
}

impl PrereqError {
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Maps a `Custom(code)` program error back to its variant, if it's one of ours.
    pub fn from_code(code: u32) -> Option<Self> {
        Self::from_repr(code)
    }

    pub fn message(self) -> &'static str {
        self.into()
    }
}

impl From<PrereqError> for &'static str {
    fn from(value: PrereqError) -> Self {
        match value {
            PrereqError::PreReqTsNotCompleted => "TS submission not completed.",
            PrereqError::PreReqTsAlreadyCompleted => "TS submission already completed.",
            PrereqError::PreReqRsAlreadyCompleted => "Rust submission already completed.",
            PrereqError::PreReqRsNotInTimeWindow => "Submission not allowed.",
        }
    }
}

impl fmt::Display for PrereqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for PrereqError {}

/// Failures while encoding instructions or decoding account data locally.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InterfaceError {
    InsufficientByteLength,
    InvalidInstructionDiscriminator,
    InvalidAccountDiscriminator,
    InvalidAccountData,
    EncodingFailed,
}

impl From<InterfaceError> for &'static str {
    fn from(value: InterfaceError) -> Self {
        match value {
            InterfaceError::InsufficientByteLength => "Not enough bytes passed",
            InterfaceError::InvalidInstructionDiscriminator => "Unknown instruction discriminator",
            InterfaceError::InvalidAccountDiscriminator => "Invalid account discriminator",
            InterfaceError::InvalidAccountData => "Account data doesn't match the declared layout",
            InterfaceError::EncodingFailed => "Value can't be borsh encoded",
        }
    }
}

impl fmt::Display for InterfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg: &'static str = self.clone().into();
        f.write_str(msg)
    }
}

impl std::error::Error for InterfaceError {}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::PrereqError;
    use crate::idl::IDL;

    #[test]
    fn error_codes_match_descriptor() {
        assert_eq!(PrereqError::iter().count(), IDL.errors.len());
        for error in PrereqError::iter() {
            let declared = IDL
                .error(error.code())
                .expect("Every error code should be declared");
            assert_eq!(declared.name, format!("{error}"));
            assert_eq!(declared.msg, error.message());
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(PrereqError::from_code(6002), Some(PrereqError::PreReqRsAlreadyCompleted));
        assert_eq!(PrereqError::from_code(5999), None);
        assert_eq!(PrereqError::from_code(6004), None);
        assert_eq!(PrereqError::from_code(0), None);
    }
}
