use crate::utils::format_byte_count;

pub fn cmd_format_bytes(bytes: &[f64]) -> Result<(), Box<dyn std::error::Error>> {
    for value in bytes {
        println!("{}\t{}", value, format_byte_count(*value));
    }
    Ok(())
}
