use crate::constants::{AI_CHAT, LOYALTY, REAL_TIME, SUBSCRIPTIONS, VOICE_ORDER};
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Represents a set of optional capabilities.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct FeatureSet: u32 {
        const AI_CHAT = 1 << 0;
        const VOICE_ORDER = 1 << 1;
        const SUBSCRIPTIONS = 1 << 2;
        const LOYALTY = 1 << 3;
        const REAL_TIME = 1 << 4;

        const ALL = Self::AI_CHAT.bits()
            | Self::VOICE_ORDER.bits()
            | Self::SUBSCRIPTIONS.bits()
            | Self::LOYALTY.bits()
            | Self::REAL_TIME.bits();
    }
}

impl From<&str> for FeatureSet {
    fn from(s: &str) -> Self {
        match s {
            AI_CHAT => Self::AI_CHAT,
            VOICE_ORDER => Self::VOICE_ORDER,
            SUBSCRIPTIONS => Self::SUBSCRIPTIONS,
            LOYALTY => Self::LOYALTY,
            REAL_TIME => Self::REAL_TIME,
            "all" | "*" => Self::ALL,
            _ => Self::empty(),
        }
    }
}

impl From<u32> for FeatureSet {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl FeatureSet {
    /// Stable wire names of the individual flags, in bit order.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        [
            (Self::AI_CHAT, AI_CHAT),
            (Self::VOICE_ORDER, VOICE_ORDER),
            (Self::SUBSCRIPTIONS, SUBSCRIPTIONS),
            (Self::LOYALTY, LOYALTY),
            (Self::REAL_TIME, REAL_TIME),
        ]
        .into_iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, name)| name)
        .collect()
    }
}

impl Serialize for FeatureSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for FeatureSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Self::from_bits_retain(bits))
    }
}
