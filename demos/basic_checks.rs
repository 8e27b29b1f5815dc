extern crate biosymbols;

use biosymbols::{Dna, NucleicAcid, Rna, Symbol};

fn main() {
    println!("{}", Dna::decode(b'A') == Dna::A);
    println!("{}", Dna::A.is_certain());

    let letter = b'T';
    let nucleotide = Dna::decode(letter);
    let out_letter = nucleotide.encode();
    println!(
        "The letter {} is the nucleotide {}",
        letter as char, out_letter as char
    );

    println!("---complement---");
    for &symbol in Dna::alphabet() {
        println!("{} -> {}", symbol, symbol.complement());
    }

    println!("---rna---");
    println!("{:?}", Rna::decode(b'T'));
    println!("{:?}", Rna::from(nucleotide));
}
