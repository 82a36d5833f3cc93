//! Conversion result for one input.

use crate::error::CidrRegexError;
use crate::processing::CidrRegexBuilder;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// One input CIDR and what it converted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// The input exactly as given.
    pub cidr: String,
    pub result: Result<String, CidrRegexError>,
}

impl Record {
    pub fn convert(builder: &CidrRegexBuilder, cidr: &str) -> Record {
        Record {
            cidr: cidr.to_string(),
            result: builder.build(cidr),
        }
    }

    /// The regex, or the error message for a failed input.
    pub fn body(&self) -> String {
        match &self.result {
            Ok(regex) => regex.clone(),
            Err(e) => e.to_string(),
        }
    }

    /// `<cidr>:`, the regex or message, then a blank line.
    pub fn to_text(&self) -> String {
        format!("{}:\n{}\n\n", self.cidr, self.body())
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Record", 2)?;
        state.serialize_field("cidr", &self.cidr)?;
        match &self.result {
            Ok(regex) => state.serialize_field("regex", regex)?,
            Err(e) => state.serialize_field("error", &e.to_string())?,
        }
        state.end()
    }
}
