use std::env;
use std::fs;
use std::io::Read;

use itertools::Itertools;

use rk_folding::KnotAware;
use rk_folding::Nussinov;
use rk_structure::DotBracketVec;
use rk_structure::PairSet;
use rk_structure::SecondaryStructure;
use rk_structure::connect_table;
use rk_structure::distance;
use rk_structure::is_pseudoknot;
use rk_structure::is_simple_pseudoknot;
use rk_structure::parse_fasta;
use rk_structure::similarity;

fn report(label: &str, ss: &SecondaryStructure) {
    let pt = ss.pair_table();
    println!("{label}:");
    println!("  {}", DotBracketVec::from(pt));
    let pairs = PairSet::from(pt)
        .to_vec()
        .iter()
        .map(|p| format!("({},{})", p.i(), p.j()))
        .join(" ");
    println!("  {} pairs: {}", ss.num_pairs(), pairs);
    println!(
        "  pseudoknot: {}, simple pseudoknot: {}",
        is_pseudoknot(pt),
        is_simple_pseudoknot(pt)
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let input = match args.next() {
        Some(path) if path != "-" => fs::read_to_string(path)?,
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let sequence = parse_fasta(&input)?;
    log::info!("loaded '{}' ({} nt)", sequence.name(), sequence.len());
    println!("{sequence}");

    let nested = Nussinov::predict(&sequence)?;
    let knotted = KnotAware::predict(&sequence)?;

    report("crossing-free", &nested);
    report("knot-aware", &knotted);

    println!(
        "predictions: distance {}, similarity {:.3}",
        distance(&nested, &knotted),
        similarity(&nested, &knotted)?
    );

    println!("{}", connect_table(&knotted));
    Ok(())
}
