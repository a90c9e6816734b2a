use crate::constants::ID_DELIMITER;
use crate::error::RfxError;
use std::fmt;
use std::str::FromStr;

/// Composite device id such as `257.A.1`.
///
/// Components are kept as text; each packet type decides how many it expects
/// and how each one is typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceId {
    parts: Vec<String>,
}

impl DeviceId {
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        DeviceId {
            parts: parts.into_iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Returns the components when there are exactly `arity` of them.
    pub fn expect_arity(&self, arity: usize) -> Result<&[String], RfxError> {
        if self.parts.len() != arity {
            return Err(RfxError::invalid_device_id(
                &self.to_string(),
                format!("expected {} components, got {}", arity, self.parts.len()),
            ));
        }
        Ok(&self.parts)
    }

    /// Parses component `index` as an integer of type `T`.
    pub fn number<T: FromStr>(&self, index: usize) -> Result<T, RfxError> {
        let part = self.part(index)?;
        part.parse::<T>()
            .map_err(|_| RfxError::invalid_device_id(&self.to_string(), format!("'{}' is not a valid number", part)))
    }

    /// Parses component `index` as a single-byte character.
    pub fn byte_char(&self, index: usize) -> Result<u8, RfxError> {
        let part = self.part(index)?;
        let mut chars = part.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => u8::try_from(c).map_err(|_| {
                RfxError::invalid_device_id(&self.to_string(), format!("'{}' does not fit in one byte", c))
            }),
            _ => Err(RfxError::invalid_device_id(
                &self.to_string(),
                format!("'{}' is not a single character", part),
            )),
        }
    }

    fn part(&self, index: usize) -> Result<&str, RfxError> {
        self.parts
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| RfxError::invalid_device_id(&self.to_string(), format!("missing component {}", index)))
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", ID_DELIMITER)?;
            }
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}

impl FromStr for DeviceId {
    type Err = RfxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(RfxError::invalid_device_id(s, "empty device id"));
        }
        Ok(DeviceId::new(s.split(ID_DELIMITER)))
    }
}
