use std::{fmt::{self, Debug, Display}, net::{IpAddr, Ipv4Addr}, str::FromStr};

use thiserror::Error;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; 4]);

impl Address {
	pub const fn new(octets: [u8; 4]) -> Self {
		Self(octets)
	}

	/// Parses a dotted-quad IPv4 literal.
	///
	/// An IPv4-mapped IPv6 literal (`::ffff:a.b.c.d`) is accepted too and
	/// unwrapped to the address it carries. Every other IPv6 address is
	/// rejected with [`AddressError::NotIpv4`].
	pub fn parse(text: &str) -> Result<Self, AddressError> {
		let ip = IpAddr::from_str(text)
			.map_err(|_| AddressError::Malformed(text.to_owned()))?;

		match ip {
			IpAddr::V4(ip) => Ok(ip.into()),
			IpAddr::V6(ip) => ip.to_ipv4_mapped()
				.map(Self::from)
				.ok_or_else(|| AddressError::NotIpv4(text.to_owned())),
		}
	}

	pub fn octets(&self) -> [u8; 4] {
		self.0
	}
}

impl From<[u8; 4]> for Address {
	fn from(octets: [u8; 4]) -> Self {
		Self(octets)
	}
}

impl From<Ipv4Addr> for Address {
	fn from(ip: Ipv4Addr) -> Self {
		Self(ip.octets())
	}
}

impl FromStr for Address {
	type Err = AddressError;

	fn from_str(text: &str) -> Result<Self, Self::Err> {
		Self::parse(text)
	}
}

impl Display for Address {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let [b1, b2, b3, b4] = self.0;
		write!(f, "{b1}.{b2}.{b3}.{b4}")
	}
}

impl Debug for Address {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Address({self})")
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
	#[error("`{0}` is not an IP address")]
	Malformed(String),
	#[error("address needs to be IPv4, got `{0}`")]
	NotIpv4(String),
}
