//! OxiHuff CLI - The Oxidized Prefix Coder
//!
//! A Pure Rust Huffman coding utility. Compression writes two files: the
//! bit-packed payload and the serialized tree needed to decode it.

use clap::{Parser, Subcommand};
use oxihuff_core::bitstream::{BitReader, BitWriter};
use oxihuff_core::error::Result;
use oxihuff_huffman::{HuffmanTree, count_frequencies, render};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "oxihuff")]
#[command(
    author,
    version,
    about = "The Oxidized Prefix Coder - Pure Rust Huffman coding"
)]
#[command(long_about = "
OxiHuff is a Pure Rust implementation of Huffman coding.
Encoding produces two files: the compressed payload and the serialized
prefix tree; decoding needs both.

Examples:
  oxihuff encode input.txt output.huff output.tree
  oxihuff encode input.txt output.huff output.tree --print-tree
  oxihuff decode output.huff output.tree roundtrip.txt
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file with Huffman coding
    #[command(alias = "e")]
    Encode {
        /// File to be encoded
        input: PathBuf,

        /// Encoded output
        output: PathBuf,

        /// Serialized Huffman tree for decoding
        treefile: PathBuf,

        /// Print the generated tree before encoding
        #[arg(long)]
        print_tree: bool,
    },

    /// Decompress a file using its companion tree file
    #[command(alias = "d")]
    Decode {
        /// File to be decoded
        input: PathBuf,

        /// Serialized Huffman tree to use for decoding
        treefile: PathBuf,

        /// Decompressed output
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encode {
            input,
            output,
            treefile,
            print_tree,
        } => encode(&input, &output, &treefile, print_tree),
        Commands::Decode {
            input,
            treefile,
            output,
        } => decode(&input, &treefile, &output),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn encode(input: &Path, output: &Path, treefile: &Path, print_tree: bool) -> Result<()> {
    let data = fs::read(input)?;
    let tree = HuffmanTree::from_frequencies(count_frequencies(&data))?;

    if print_tree {
        match render(&tree) {
            Some(listing) => print!("{listing}"),
            None => println!("Tree is too big to print. Try with a smaller file."),
        }
    }

    let mut payload_writer = BitWriter::new(BufWriter::new(File::create(output)?));
    tree.encode(&data, &mut payload_writer)?;
    payload_writer.close()?;

    let mut tree_writer = BitWriter::new(BufWriter::new(File::create(treefile)?));
    tree.write_tree(&mut tree_writer)?;
    tree_writer.close()?;

    let payload_len = fs::metadata(output)?.len();
    let tree_len = fs::metadata(treefile)?.len();
    println!(
        "Encoded {} bytes -> {} payload bytes + {} tree bytes ({:.1}%)",
        data.len(),
        payload_len,
        tree_len,
        (payload_len + tree_len) as f64 / data.len() as f64 * 100.0
    );
    Ok(())
}

fn decode(input: &Path, treefile: &Path, output: &Path) -> Result<()> {
    let mut tree_reader = BitReader::new(fs::read(treefile)?)?;
    let tree = HuffmanTree::from_reader(&mut tree_reader)?;

    let mut payload_reader = BitReader::new(fs::read(input)?)?;
    let decoded = tree.decode(&mut payload_reader)?;
    fs::write(output, &decoded)?;

    println!("Decoded {} bytes", decoded.len());
    Ok(())
}
