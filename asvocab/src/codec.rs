//! Leaf codecs between native scalars and their JSON-LD representation.
//!
//! Every `deserialize` fails cleanly with `None` on a shape mismatch, so the resolver can move on
//! to the next candidate in a property's range.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, SecondsFormat, TimeDelta};
use serde_json::Value;

use crate::Variant;

/// natural language alternatives of a property, language tag to plain string
pub type LanguageMap = BTreeMap<String, String>;

pub const UNITS : [&str; 6] = ["cm", "feet", "inches", "km", "m", "miles"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Codec {
	AnyUri,
	DateTime,
	Duration,
	Float,
	String,
	LangString,
	MimeMediaType,
	Boolean,
	NonNegativeInteger,
	Bcp47,
	LinkRelation,
	Unit,
}

impl Codec {
	pub fn name(&self) -> &'static str {
		match self {
			Codec::AnyUri => "anyURI",
			Codec::DateTime => "dateTime",
			Codec::Duration => "duration",
			Codec::Float => "float",
			Codec::String => "string",
			Codec::LangString => "langString",
			Codec::MimeMediaType => "mimeMediaTypeValue",
			Codec::Boolean => "boolean",
			Codec::NonNegativeInteger => "nonNegativeInteger",
			Codec::Bcp47 => "bcp47",
			Codec::LinkRelation => "linkRelation",
			Codec::Unit => "unit",
		}
	}

	pub fn deserialize(&self, raw: &Value) -> Option<Variant> {
		match self {
			Codec::AnyUri => Iri::parse(raw.as_str()?).ok().map(Variant::Iri),
			Codec::DateTime => parse_datetime(raw.as_str()?).map(Variant::DateTime),
			Codec::Duration => parse_duration(raw.as_str()?).map(Variant::Duration),
			Codec::Float => raw.as_f64().map(Variant::Float),
			Codec::String => raw.as_str().map(|x| Variant::String(x.to_string())),
			// language strings only travel in the `<name>Map` form, see `language_map`
			Codec::LangString => None,
			Codec::MimeMediaType => raw.as_str()
				.filter(|x| is_media_type(x))
				.map(|x| Variant::MediaType(x.to_string())),
			Codec::Boolean => raw.as_bool().map(Variant::Boolean),
			Codec::NonNegativeInteger => raw.as_u64().map(Variant::NonNegativeInteger),
			Codec::Bcp47 => raw.as_str()
				.filter(|x| is_language_tag(x))
				.map(|x| Variant::LanguageTag(x.to_string())),
			Codec::LinkRelation => raw.as_str()
				.filter(|x| is_link_relation(x))
				.map(|x| Variant::LinkRelation(x.to_string())),
			Codec::Unit => raw.as_str()
				.filter(|x| UNITS.contains(x))
				.map(|x| Variant::Unit(x.to_string())),
		}
	}

	/// true if this codec is the one producing (and serializing) given variant
	pub fn accepts(&self, variant: &Variant) -> bool {
		matches!(
			(self, variant),
			(Codec::AnyUri, Variant::Iri(_))
			| (Codec::DateTime, Variant::DateTime(_))
			| (Codec::Duration, Variant::Duration(_))
			| (Codec::Float, Variant::Float(_))
			| (Codec::String, Variant::String(_))
			| (Codec::MimeMediaType, Variant::MediaType(_))
			| (Codec::Boolean, Variant::Boolean(_))
			| (Codec::NonNegativeInteger, Variant::NonNegativeInteger(_))
			| (Codec::Bcp47, Variant::LanguageTag(_))
			| (Codec::LinkRelation, Variant::LinkRelation(_))
			| (Codec::Unit, Variant::Unit(_))
		)
	}
}

/// IRI reference, validated as an absolute URL but kept exactly as written
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iri(String);

impl Iri {
	pub fn parse(value: &str) -> Result<Self, url::ParseError> {
		url::Url::parse(value)?;
		Ok(Iri(value.to_string()))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn to_url(&self) -> Result<url::Url, url::ParseError> {
		url::Url::parse(&self.0)
	}
}

impl AsRef<str> for Iri {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl std::fmt::Display for Iri {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

impl std::str::FromStr for Iri {
	type Err = url::ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Iri::parse(s)
	}
}

impl From<url::Url> for Iri {
	fn from(value: url::Url) -> Self {
		Iri(value.into())
	}
}

pub fn parse_datetime(value: &str) -> Option<DateTime<FixedOffset>> {
	DateTime::parse_from_rfc3339(value).ok()
}

pub fn format_datetime(value: &DateTime<FixedOffset>) -> String {
	value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// integral values within the exactly representable range go out as json integers
pub fn serialize_float(value: f64) -> crate::Result<Value> {
	const EXACT : f64 = 9_007_199_254_740_992.0; // 2^53
	if value.is_finite() && value.fract() == 0.0 && value.abs() <= EXACT {
		return Ok(Value::Number((value as i64).into()));
	}
	serde_json::Number::from_f64(value)
		.map(Value::Number)
		.ok_or(crate::Error::NonFiniteFloat(value))
}

pub fn language_map(raw: &Value) -> Option<LanguageMap> {
	raw.as_object()?
		.iter()
		.map(|(lang, text)| Some((lang.clone(), text.as_str()?.to_string())))
		.collect()
}

pub fn language_map_value(map: &LanguageMap) -> Value {
	Value::Object(
		map.iter()
			.map(|(lang, text)| (lang.clone(), Value::String(text.clone())))
			.collect()
	)
}

const SECONDS_PER_DAY : i64 = 86_400;

/// parses an xsd:duration, `[-]PnYnMnDTnHnMnS`; years count 365 days and months 30
pub fn parse_duration(value: &str) -> Option<TimeDelta> {
	let (negative, rest) = match value.strip_prefix('-') {
		Some(rest) => (true, rest),
		None => (false, value),
	};
	let rest = rest.strip_prefix('P')?;
	let (date, time) = match rest.split_once('T') {
		Some((_, "")) => return None,
		Some((date, time)) => (date, time),
		None => (rest, ""),
	};
	if date.is_empty() && time.is_empty() {
		return None;
	}

	let mut seconds : i64 = 0;
	let mut nanos : u32 = 0;

	for (designator, number) in components(date, &['Y', 'M', 'D'])? {
		let n : i64 = number.parse().ok()?;
		let unit = match designator {
			'Y' => 365 * SECONDS_PER_DAY,
			'M' => 30 * SECONDS_PER_DAY,
			_ => SECONDS_PER_DAY,
		};
		seconds = seconds.checked_add(n.checked_mul(unit)?)?;
	}

	for (designator, number) in components(time, &['H', 'M', 'S'])? {
		if designator == 'S' {
			let (whole, fraction) = match number.split_once('.') {
				Some((whole, fraction)) => (whole, fraction),
				None => (number, "0"),
			};
			if whole.is_empty() || fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
				return None;
			}
			seconds = seconds.checked_add(whole.parse().ok()?)?;
			let mut digits = fraction.chars().take(9).collect::<String>();
			while digits.len() < 9 {
				digits.push('0');
			}
			nanos = digits.parse().ok()?;
		} else {
			let n : i64 = number.parse().ok()?;
			let unit = if designator == 'H' { 3600 } else { 60 };
			seconds = seconds.checked_add(n.checked_mul(unit)?)?;
		}
	}

	let delta = TimeDelta::new(seconds, nanos)?;
	Some(if negative { -delta } else { delta })
}

// splits "1Y2M" into [('Y', "1"), ('M', "2")], enforcing designator order
fn components<'a>(part: &'a str, designators: &[char]) -> Option<Vec<(char, &'a str)>> {
	let mut out = Vec::new();
	let mut start = 0;
	let mut next = 0;
	for (i, c) in part.char_indices() {
		if c.is_ascii_digit() || c == '.' {
			continue;
		}
		let pos = next + designators[next..].iter().position(|d| *d == c)?;
		let number = &part[start..i];
		if number.is_empty() {
			return None;
		}
		out.push((c, number));
		next = pos + 1;
		start = i + c.len_utf8();
	}
	if start != part.len() {
		return None;
	}
	Some(out)
}

pub fn format_duration(value: &TimeDelta) -> String {
	let negative = *value < TimeDelta::zero();
	let abs = value.abs();
	let total = abs.num_seconds();
	let nanos = abs.subsec_nanos();

	let days = total / SECONDS_PER_DAY;
	let hours = (total % SECONDS_PER_DAY) / 3600;
	let minutes = (total % 3600) / 60;
	let seconds = total % 60;

	let mut out = String::new();
	if negative {
		out.push('-');
	}
	out.push('P');
	if days > 0 {
		out.push_str(&format!("{days}D"));
	}

	let mut time = String::new();
	if hours > 0 {
		time.push_str(&format!("{hours}H"));
	}
	if minutes > 0 {
		time.push_str(&format!("{minutes}M"));
	}
	if nanos > 0 {
		let fraction = format!("{nanos:09}");
		time.push_str(&format!("{seconds}.{}S", fraction.trim_end_matches('0')));
	} else if seconds > 0 || (days == 0 && time.is_empty()) {
		time.push_str(&format!("{seconds}S"));
	}

	if !time.is_empty() {
		out.push('T');
		out.push_str(&time);
	}
	out
}

fn is_token(value: &str) -> bool {
	!value.is_empty() && !value.chars().any(|c| c.is_whitespace() || c == '/' || c == ';')
}

fn is_media_type(value: &str) -> bool {
	let essence = value.split(';').next().unwrap_or_default().trim();
	match essence.split_once('/') {
		Some((kind, subtype)) => is_token(kind) && is_token(subtype),
		None => false,
	}
}

fn is_language_tag(value: &str) -> bool {
	!value.is_empty()
		&& value.split('-').all(|x| (1..=8).contains(&x.len()) && x.chars().all(|c| c.is_ascii_alphanumeric()))
}

fn is_link_relation(value: &str) -> bool {
	!value.is_empty() && !value.chars().any(|c| c.is_whitespace() || c == ',')
}
