use std::io::Write;

/// A C source fragment declaring the sorted key array for the binary-search
/// benchmark, plus the two constants the search loop needs: `RIGHT` is the
/// initial right bound (the last valid index) and `FAILED` is the
/// out-of-range index returned when a probe misses.
///
/// The array holds every key from 0 to `size - 1` in order, so looking up
/// key `k` must return index `k`.
pub struct Fixture {
    size: u64,
}

impl Fixture {
    pub fn new(size: u64) -> anyhow::Result<Self> {
        // A zero-size fixture would emit RIGHT as -1 and an empty array,
        // and the benchmark indexes array[RIGHT] unconditionally.
        anyhow::ensure!(size > 0, "array size must be at least 1, got {}", size);
        Ok(Self { size })
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn failed(&self) -> u64 {
        self.size
    }

    pub fn right(&self) -> u64 {
        self.size - 1
    }

    /// Streams the fragment into `out`.
    ///
    /// The layout (leading blank line, trailing comma after the last
    /// element, trailing blank line) is byte-identical to the fixtures
    /// already checked into consuming builds, so none of it may change.
    pub fn write_to(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out)?;
        writeln!(out, "#define FAILED {}", self.failed())?;
        writeln!(out, "#define RIGHT {}", self.right())?;
        writeln!(out)?;
        writeln!(out, "unsigned long long array[{}] = {{", self.size)?;
        write!(out, "    ")?;
        for key in 0..self.size {
            write!(out, "{}, ", key)?;
        }
        writeln!(out)?;
        writeln!(out, "}};")?;
        writeln!(out)?;
        Ok(())
    }
}
