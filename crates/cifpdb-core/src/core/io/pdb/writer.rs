//! Fixed-column rendering of bundle files and the chain-id mapping table.
//!
//! Every bundle file repeats the same header block (HEADER, AUTHOR, JRNL,
//! optional SEQRES, CRYST1, SCALE1-3), then its chains' coordinate records:
//! polymer chains first, each closed by a TER record, then ligand lines,
//! then waters. Atom serials start at 1 per file and run continuously,
//! including across MODEL/ENDMDL boundaries, with each ANISOU reusing its
//! atom's serial and each TER consuming one. The trailer is a MASTER record
//! tallying coordinate lines (hydrogens excluded) and TERs, and END.

use crate::core::io::OutputFile;
use crate::core::io::format::{take_back, take_front};
use crate::core::models::atom::{AtomClass, AtomRecord};
use crate::core::models::bundle::{BundlePlan, ChainBundle};
use crate::core::models::meta::StructureMeta;

use super::super::cif::CifStructure;

/// Renders one file per bundle plus the `<id>-chain-id-mapping.txt` table.
pub fn render_bundles(structure: &CifStructure, plan: &BundlePlan) -> Vec<OutputFile> {
    let header1 = header_records(&structure.meta);
    let header2 = crystal_records(&structure.meta);
    let mut files = Vec::with_capacity(plan.bundles.len() + 1);
    for (index, bundle) in plan.bundles.iter().enumerate() {
        files.push(render_bundle(
            structure,
            bundle,
            index + 1,
            &header1,
            &header2,
        ));
    }
    files.push(mapping_file(&structure.pdb_id, plan));
    files
}

/// The mapping table readers use to translate bundle chain ids back to the
/// originals. Layout is fixed: a column header, then one block per bundle
/// file listing `mapped original` pairs.
pub fn mapping_file(pdb_id: &str, plan: &BundlePlan) -> OutputFile {
    let mut content = String::from("    New chain ID            Original chain ID\n");
    for (index, bundle) in plan.bundles.iter().enumerate() {
        content.push_str(&format!("\n{}-pdb-bundle{}.pdb:\n", pdb_id, index + 1));
        for chain in &bundle.chains {
            content.push_str(&format!(
                "           {}{:>26}\n",
                bundle.mapped_id(chain),
                chain
            ));
        }
    }
    OutputFile {
        name: format!("{pdb_id}-chain-id-mapping.txt"),
        content,
    }
}

fn render_bundle(
    structure: &CifStructure,
    bundle: &ChainBundle,
    number: usize,
    header1: &str,
    header2: &str,
) -> OutputFile {
    let mut out = String::new();
    out.push_str(header1);
    out.push_str(&seqres_records(structure, bundle));
    out.push_str(header2);

    let multi_model = structure.models.len() > 1;
    let mut serial = 0usize;
    for model in &structure.models {
        if multi_model {
            out.push_str(&format!("{:<80}\n", format!("MODEL     {model}")));
        }
        for class in [AtomClass::Polymer, AtomClass::Ligand, AtomClass::Water] {
            for chain in &bundle.chains {
                let mapped = bundle.mapped_id(chain);
                let mut last: Option<&AtomRecord> = None;
                for record in structure.atoms.iter().filter(|a| {
                    a.class == class && &a.chain_id == chain && &a.model == model
                }) {
                    serial += 1;
                    out.push_str(&atom_line(record, serial, mapped));
                    out.push('\n');
                    if let Some(tensor) = structure.anisou.get(&record.anisou_key()) {
                        out.push_str(&anisou_line(record, serial, mapped, tensor));
                        out.push('\n');
                    }
                    last = Some(record);
                }
                if class == AtomClass::Polymer {
                    if let Some(record) = last {
                        serial += 1;
                        out.push_str(&ter_line(record, serial, mapped));
                        out.push('\n');
                    }
                }
            }
        }
        if multi_model {
            out.push_str(&format!("{:<80}\n", "ENDMDL"));
        }
    }

    let mut num_coord = 0usize;
    let mut hydrogens = 0usize;
    for chain in &bundle.chains {
        if let Some(stats) = structure.chains.iter().find(|c| &c.id == chain) {
            num_coord += stats.atom_count;
            hydrogens += stats.hydrogen_count;
        }
    }
    out.push_str(&format!(
        "MASTER        0    0    0    0    0    0    0    3{:>5}{:>5}    0    0          \n",
        num_coord - hydrogens,
        bundle.chains.len()
    ));
    out.push_str(&format!("{:<80}\n", "END"));

    OutputFile {
        name: format!("{}-pdb-bundle{}.pdb", structure.pdb_id, number),
        content: out,
    }
}

fn atom_line(record: &AtomRecord, serial: usize, chain: char) -> String {
    format!(
        "{}{:>5} {}{}{} {}{}{}   {}{}{}{}{}          {}{}",
        record.group.record_name(),
        serial,
        record.name,
        record.alt_loc,
        record.res_name,
        chain,
        record.seq_id,
        record.insert_code,
        record.x,
        record.y,
        record.z,
        record.occupancy,
        record.b_factor,
        record.element,
        record.charge
    )
}

fn anisou_line(record: &AtomRecord, serial: usize, chain: char, tensor: &str) -> String {
    format!(
        "ANISOU{:>5} {}{}{} {}{}{} {}      {}{}",
        serial,
        record.name,
        record.alt_loc,
        record.res_name,
        chain,
        record.seq_id,
        record.insert_code,
        tensor,
        record.element,
        record.charge
    )
}

fn ter_line(record: &AtomRecord, serial: usize, chain: char) -> String {
    format!(
        "{:<80}",
        format!(
            "TER   {:>5}      {} {}{}{}",
            serial, record.res_name, chain, record.seq_id, record.insert_code
        )
    )
}

/// HEADER, AUTHOR, and the JRNL group, shared by every bundle of a
/// structure. Absent metadata suppresses its records; the REFN line is
/// written unconditionally, as archive files do.
fn header_records(meta: &StructureMeta) -> String {
    let mut out = String::new();
    if !meta.keywords.is_empty() || !meta.deposition_date.is_empty() {
        out.push_str(&format!(
            "HEADER    {:<40}{:<10}  XXXX              \n",
            take_front(&meta.keywords.to_uppercase(), 40),
            take_front(&meta.deposition_date, 10)
        ));
    }
    wrap_names(
        &mut out,
        "AUTHOR    ",
        |n| format!("AUTHOR  {n:>2} "),
        &meta.authors,
    );
    wrap_names(
        &mut out,
        "JRNL        AUTH   ",
        |n| format!("JRNL        AUTH {n} "),
        &meta.citation_authors,
    );
    let citation = &meta.citation;
    if !citation.title.is_empty() {
        let words: Vec<&str> = citation.title.split_whitespace().collect();
        let rest = wrap_words(
            &mut out,
            "JRNL        TITL   ",
            |n| format!("JRNL        TITL {n} "),
            &words,
            79,
        );
        if !rest.is_empty() {
            out.push_str(&format!("{rest:<80}\n"));
        }
    }
    if !citation.journal_abbrev.is_empty() {
        let words: Vec<&str> = citation.journal_abbrev.split_whitespace().collect();
        let rest = wrap_words(
            &mut out,
            "JRNL        REF    ",
            |n| format!("JRNL        REF  {n} "),
            &words,
            47,
        );
        if !rest.is_empty() {
            let volume = if citation.journal_volume.is_empty() {
                String::new()
            } else {
                format!("V.{:>4}", citation.journal_volume)
            };
            let page = take_back(&citation.page_first, 5).to_uppercase();
            out.push_str(&format!(
                "{rest:<49}{:<6} {page:>5} {:<18}\n",
                take_front(&volume, 6),
                citation.year
            ));
        }
    }
    out.push_str(&format!(
        "JRNL        REFN   {:>11}  {:<7} {:<40}\n",
        take_front(&citation.journal_id_astm, 11),
        take_front(&citation.country, 7),
        citation.journal_id_issn
    ));
    if !citation.pubmed_id.is_empty() {
        out.push_str(&format!(
            "{:<80}\n",
            format!("JRNL        PMID   {}", citation.pubmed_id)
        ));
    }
    if !citation.doi.is_empty() {
        out.push_str(&format!(
            "{:<80}\n",
            format!("JRNL        DOI    {}", citation.doi)
        ));
    }
    out
}

/// CRYST1 and SCALE1-3. Either record group is all-or-nothing: partial
/// cell or transform data is dropped rather than padded with guesses.
fn crystal_records(meta: &StructureMeta) -> String {
    let mut out = String::new();
    let cell = &meta.cell;
    if cell.is_complete() {
        out.push_str(&format!(
            "CRYST1{}{}{}{}{}{} {:<11}{:>4}          \n",
            cell.length_a,
            cell.length_b,
            cell.length_c,
            cell.angle_alpha,
            cell.angle_beta,
            cell.angle_gamma,
            cell.space_group,
            cell.z_value
        ));
    }
    if meta.scale.is_complete() {
        for (index, row) in meta.scale.rows.iter().enumerate() {
            out.push_str(&format!(
                "SCALE{}    {}{}{}     {}                         \n",
                index + 1,
                row[0],
                row[1],
                row[2],
                row[3]
            ));
        }
    }
    out
}

/// SEQRES for every chain of the bundle whose entity has a known sequence,
/// 13 residues per row, row numbering restarting per chain.
fn seqres_records(structure: &CifStructure, bundle: &ChainBundle) -> String {
    let mut out = String::new();
    if structure.entities.is_empty() {
        return out;
    }
    let chain_entity = structure.entities.chain_to_entity();
    for chain in &bundle.chains {
        let Some(entity) = chain_entity.get(chain) else {
            continue;
        };
        let Some(residues) = structure.entities.sequences.get(entity) else {
            continue;
        };
        let mapped = bundle.mapped_id(chain);
        let mut row = String::new();
        let mut row_count = 0usize;
        for (index, residue) in residues.iter().enumerate() {
            if row.is_empty() {
                row_count += 1;
                row = format!("SEQRES{row_count:>4} {mapped}{:>5} ", residues.len());
            }
            row.push(' ');
            row.push_str(residue);
            if (index + 1) % 13 == 0 || index + 1 == residues.len() {
                out.push_str(&format!("{row:<80}\n"));
                row.clear();
            }
        }
    }
    out
}

/// Comma-separated name list wrapping: names never split, wrapped lines end
/// with a trailing comma, continuation lines carry a running number.
fn wrap_names(
    out: &mut String,
    first_prefix: &str,
    cont_prefix: impl Fn(usize) -> String,
    names: &[String],
) {
    let mut line = String::new();
    let mut continuation = 0usize;
    let mut index = 0usize;
    while index < names.len() {
        if line.is_empty() {
            continuation += 1;
            line = if continuation == 1 {
                first_prefix.to_string()
            } else {
                cont_prefix(continuation)
            };
            line.push_str(&names[index]);
        } else if names[index].len() + line.len() >= 77 + usize::from(index + 1 == names.len()) {
            out.push_str(&format!("{:<80}\n", format!("{line},")));
            line.clear();
            continue;
        } else {
            line.push_str(", ");
            line.push_str(&names[index]);
        }
        index += 1;
    }
    if !line.is_empty() {
        out.push_str(&format!("{line:<80}\n"));
    }
}

/// Word wrapping for free text; the final line is returned unflushed so
/// callers can append trailing columns.
fn wrap_words(
    out: &mut String,
    first_prefix: &str,
    cont_prefix: impl Fn(usize) -> String,
    words: &[&str],
    budget: usize,
) -> String {
    let mut line = String::new();
    let mut continuation = 0usize;
    let mut index = 0usize;
    while index < words.len() {
        if line.is_empty() {
            continuation += 1;
            line = if continuation == 1 {
                first_prefix.to_string()
            } else {
                cont_prefix(continuation)
            };
            line.push_str(words[index]);
        } else if words[index].len() + line.len() >= budget {
            out.push_str(&format!("{line:<80}\n"));
            line.clear();
            continue;
        } else {
            line.push(' ');
            line.push_str(words[index]);
        }
        index += 1;
    }
    line
}
