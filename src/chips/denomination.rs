use crate::Chips;

/// A chip face value.
///
/// Declaration order is the order the distribution engine walks,
/// which decides ties between equally valuable selections.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Denomination {
    Hundred = 0,
    Fifty = 1,
    Quarter = 2,
    Ten = 3,
}

impl Denomination {
    pub const N: usize = 4;
    pub const fn all() -> [Self; Self::N] {
        [
            Denomination::Hundred,
            Denomination::Fifty,
            Denomination::Quarter,
            Denomination::Ten,
        ]
    }
    /// Face value of one chip.
    pub const fn value(&self) -> Chips {
        match self {
            Denomination::Hundred => 100,
            Denomination::Fifty => 50,
            Denomination::Quarter => 25,
            Denomination::Ten => 10,
        }
    }
    /// Position in [`Denomination::all`].
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

impl TryFrom<&str> for Denomination {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|d| d.value().to_string() == s.trim())
            .ok_or_else(|| anyhow::anyhow!("no chip with face value {}", s))
    }
}

impl std::fmt::Display for Denomination {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}
