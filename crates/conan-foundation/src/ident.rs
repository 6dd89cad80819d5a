// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use nom::bytes::complete::{tag, take_while1};
use nom::combinator::{all_consuming, map};
use nom::sequence::{preceded, separated_pair, tuple};
use nom::IResult;

use crate::{Error, Result};

#[cfg(test)]
#[path = "./ident_test.rs"]
mod ident_test;

/// Characters allowed in a reference component (name, version, user, channel).
#[inline]
fn is_component_chr(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '+')
}

fn component(input: &str) -> IResult<&str, &str> {
    take_while1(is_component_chr)(input)
}

fn reference_parts(input: &str) -> IResult<&str, (&str, &str, &str, &str)> {
    map(
        tuple((
            separated_pair(component, tag("/"), component),
            preceded(tag("@"), separated_pair(component, tag("/"), component)),
        )),
        |((name, version), (user, channel))| (name, version, user, channel),
    )(input)
}

/// The identity of a recipe version: `name/version@user/channel`.
///
/// All four components are required and non-empty; equality is structural.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Reference {
    name: String,
    version: String,
    user: String,
    channel: String,
}

impl Reference {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        user: impl Into<String>,
        channel: impl Into<String>,
    ) -> Result<Self> {
        let (name, version, user, channel) =
            (name.into(), version.into(), user.into(), channel.into());
        if [&name, &version, &user, &channel]
            .iter()
            .any(|s| s.is_empty())
        {
            return Err(Error::ReferenceParseError(format!(
                "{name}/{version}@{user}/{channel}"
            )));
        }
        Ok(Self {
            name,
            version,
            user,
            channel,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Construct a [`PackageReference`] by attaching a binary package id.
    pub fn with_package_id(&self, package_id: impl Into<String>) -> Result<PackageReference> {
        PackageReference::new(self.clone(), package_id)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}@{}/{}",
            self.name, self.version, self.user, self.channel
        )
    }
}

impl FromStr for Reference {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let (_, (name, version, user, channel)) = all_consuming(reference_parts)(input)
            .map_err(|_| Error::ReferenceParseError(input.to_string()))?;
        Reference::new(name, version, user, channel)
    }
}

/// Returns true if `hex` is a valid lowercase SHA-1 hex digest (40 chars).
pub(crate) fn is_valid_package_id(hex: &str) -> bool {
    hex.len() == 40 && hex.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase())
}

/// The identity of a built binary package: a [`Reference`] plus its package id,
/// a lowercase hex SHA-1 digest (40 chars) of the canonical `ConanInfo`.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PackageReference {
    reference: Reference,
    package_id: String,
}

impl PackageReference {
    pub fn new(reference: Reference, package_id: impl Into<String>) -> Result<Self> {
        let package_id = package_id.into();
        if !is_valid_package_id(&package_id) {
            return Err(Error::ReferenceParseError(format!(
                "{reference}:{package_id}"
            )));
        }
        Ok(Self {
            reference,
            package_id,
        })
    }

    pub fn reference(&self) -> &Reference {
        &self.reference
    }

    pub fn package_id(&self) -> &str {
        &self.package_id
    }
}

impl fmt::Display for PackageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.reference, self.package_id)
    }
}
