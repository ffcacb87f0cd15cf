//! Named bit-flag registry

use ahash::AHashMap;

/// Registry mapping flag names to bits of a `u64`
///
/// Names are case-insensitive and `|`-separated wherever a list is accepted.
/// Registration order fixes the bit positions, so the same registry always
/// parses and formats a value the same way.
///
/// # Example
/// ```
/// use fairq::BitMask;
///
/// let mut b = BitMask::new();
/// b.add("read")?;
/// b.add("write|exec")?;
///
/// let v = b.parse("read|exec")?;
/// assert_eq!(v, 0b101);
/// assert!(b.is_set(v, "read"));
/// assert!(!b.is_set(v, "write"));
/// assert_eq!(b.format(v), "read|exec");
/// # Ok::<(), fairq::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct BitMask {
    /// Lowercased name -> bit position
    bits: AHashMap<String, u32>,
    /// Names in registration (bit) order
    names: Vec<String>,
}

impl BitMask {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one or more `|`-separated flag names
    ///
    /// Each new name takes the next free bit. Re-registering a known name is
    /// a no-op. Fails once 64 names are taken.
    pub fn add(&mut self, names: &str) -> crate::Result<()> {
        for name in names.split('|') {
            let name = name.trim().to_lowercase();
            if name.is_empty() || self.bits.contains_key(&name) {
                continue;
            }
            if self.names.len() >= u64::BITS as usize {
                return Err(crate::Error::RegistryFull(name));
            }
            self.bits.insert(name.clone(), self.names.len() as u32);
            self.names.push(name);
        }
        Ok(())
    }

    /// Parse a `|`-separated name list into its combined bit value
    ///
    /// Any name missing from the registry fails the whole parse.
    pub fn parse(&self, names: &str) -> crate::Result<u64> {
        let mut value: u64 = 0;
        for name in names.split('|') {
            let name = name.trim().to_lowercase();
            match self.bits.get(&name) {
                Some(&bit) => value |= 1 << bit,
                None => return Err(crate::Error::UnknownFlag(name)),
            }
        }
        Ok(value)
    }

    /// Test whether *all* named bits are set in `value`
    ///
    /// Unknown names test false.
    pub fn is_set(&self, value: u64, names: &str) -> bool {
        match self.parse(names) {
            Ok(bits) => value & bits == bits,
            Err(_) => false,
        }
    }

    /// Render a bit value as lowercase `|`-joined names in bit order
    ///
    /// Bits with no registered name are silently dropped.
    pub fn format(&self, value: u64) -> String {
        let mut out: Vec<&str> = Vec::new();
        for (bit, name) in self.names.iter().enumerate() {
            if value & (1 << bit) != 0 {
                out.push(name);
            }
        }
        out.join("|")
    }

    /// Number of registered flag names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if no names are registered
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
