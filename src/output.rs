use crate::Error;

/// Write a PEM block to a local file.
pub fn write_pem<P: AsRef<std::path::Path>>(pem_file: P, pem: &str) -> Result<(), Error> {
    use std::io::Write;

    let mut f = std::fs::File::create(pem_file)?;
    f.write_all(pem.as_bytes())?;
    Ok(())
}
