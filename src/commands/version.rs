use std::io::Write;

use anyhow::Result;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", VERSION)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_prints_package_version() {
        let mut out = Vec::new();
        version(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1.0.0\n");
    }
}
