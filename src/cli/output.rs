//! Rendering of resolved addresses and ORFs in the supported output formats.

use std::io::Write;

use noodles::fasta;

use crate::cli::OutputFormat;
use crate::core::address::Address;

/// Write addresses (with their sequences) in the requested format
///
/// # Errors
///
/// Returns an error if writing fails or JSON serialization fails.
pub fn write_addresses<W: Write>(
    writer: &mut W,
    addresses: &[Address],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => write_text(writer, addresses)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, addresses)?;
            writeln!(writer)?;
        }
        OutputFormat::Tsv => write_tsv(writer, addresses)?,
        OutputFormat::Fasta => write_fasta(writer, addresses)?,
    }
    Ok(())
}

fn sequence_str(address: &Address) -> &str {
    address.sequence.as_ref().map_or("", |s| s.as_str())
}

fn write_text<W: Write>(writer: &mut W, addresses: &[Address]) -> std::io::Result<()> {
    for address in addresses {
        writeln!(writer, "{address}")?;
        writeln!(writer, "{}", sequence_str(address))?;
    }
    Ok(())
}

fn write_tsv<W: Write>(writer: &mut W, addresses: &[Address]) -> std::io::Result<()> {
    let bound = |b: Option<u64>| b.map(|b| b.to_string()).unwrap_or_default();

    writeln!(writer, "address\tdatabase\tid\tstart\tstop\tlength\tsequence")?;
    for address in addresses {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            address,
            address.database,
            address.id,
            bound(address.external_start()),
            bound(address.stop()),
            sequence_str(address).len(),
            sequence_str(address),
        )?;
    }
    Ok(())
}

fn write_fasta<W: Write>(writer: &mut W, addresses: &[Address]) -> std::io::Result<()> {
    let mut fasta_writer = fasta::io::Writer::new(writer);

    for address in addresses {
        let definition = fasta::record::Definition::new(address.to_string(), None);
        let sequence = fasta::record::Sequence::from(sequence_str(address).as_bytes().to_vec());
        fasta_writer.write_record(&fasta::Record::new(definition, sequence))?;
    }
    Ok(())
}
