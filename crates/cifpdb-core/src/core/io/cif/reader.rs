//! Single-pass mmCIF record assembler.
//!
//! One forward scan over the input resolves every category this crate cares
//! about: entry identity, keywords, dates, authors, the primary citation,
//! cell/symmetry/scale data, optional polymer sequences, and the
//! `_atom_site` / `_atom_site_anisotrop` coordinate loops. Both key-value
//! and `loop_` renditions of each category are accepted. Atom fields are
//! padded to their PDB column widths as they are read, so the writer can
//! splice them into records without reformatting.

use std::collections::HashMap;

use crate::core::io::format::{format_anisou, format_fixed, take_back, take_front};
use crate::core::models::atom::{AnisouKey, AtomClass, AtomRecord, GroupKind};
use crate::core::models::bundle::ChainStats;
use crate::core::models::meta::{EntityMeta, StructureMeta};

use super::CifError;
use super::fields::{AtomField, AtomSiteDict, ColumnDict};
use super::line::{split_quoted, trim_quotes};
use super::tracker::{ParserState, complete_row};

/// Everything extracted from one mmCIF file.
#[derive(Debug, Default)]
pub struct CifStructure {
    /// Lowercased entry id, `xxxx` when the input declares none.
    pub pdb_id: String,
    pub meta: StructureMeta,
    pub entities: EntityMeta,
    /// All coordinate records, every model, in file order.
    pub atoms: Vec<AtomRecord>,
    /// Pre-rendered 42-character `ANISOU` tensor fields, first model only.
    pub anisou: HashMap<AnisouKey, String>,
    /// Chains of the first model in encounter order.
    pub chains: Vec<ChainStats>,
    /// Distinct padded model numbers in encounter order.
    pub models: Vec<String>,
}

impl CifStructure {
    /// Scans `content` once and assembles the structure.
    ///
    /// `read_seqres` enables the `_entity_poly` / `_entity_poly_seq`
    /// categories; they are skipped entirely otherwise.
    pub fn parse(content: &str, read_seqres: bool) -> Result<Self, CifError> {
        let lines: Vec<String> = content.lines().map(str::to_string).collect();
        let mut scan = Scan::default();
        let mut state = ParserState::default();
        let mut l = 0usize;
        while l < lines.len() {
            let line = &lines[l];
            // Inside a coordinate loop, quote pairing is disabled: primed
            // atom names such as O5' carry bare apostrophes.
            let honor_quotes = state.atom_site.is_empty() || line.starts_with("_atom_site");
            let mut tokens = split_quoted(line, ' ', honor_quotes);
            if tokens.is_empty() {
                l += 1;
                continue;
            }
            if tokens.len() == 1 && tokens[0] == "#" {
                scan.flush_block();
                state = ParserState::default();
            } else if tokens.len() == 1 && tokens[0] == "loop_" {
                state.in_loop = true;
            } else if scan.pdb_id.is_empty() && l == 0 && line.starts_with("data_") {
                scan.pdb_id = line[5..].to_lowercase();
            } else if scan.pdb_id.is_empty() && tokens.len() > 1 && tokens[0] == "_entry.id" {
                scan.pdb_id = tokens[1].to_lowercase();
            } else if line.starts_with("_struct_keywords") {
                if state.in_loop {
                    state.struct_keywords.declare(&tokens[0]);
                } else if tokens.len() > 1 && tokens[0] == "_struct_keywords.pdbx_keywords" {
                    scan.meta.keywords.push_str(trim_quotes(&tokens[1]));
                }
            } else if state.struct_keywords.has("_struct_keywords.pdbx_keywords") {
                if let Some(v) = state
                    .struct_keywords
                    .value(&tokens, "_struct_keywords.pdbx_keywords")
                {
                    scan.meta.keywords.push_str(v);
                }
            } else if line.starts_with("_pdbx_database_status.") {
                if state.in_loop {
                    state.database_status.declare(&tokens[0]);
                } else if tokens.len() > 1
                    && tokens[0] == "_pdbx_database_status.recvd_initial_deposition_date"
                {
                    scan.meta.deposition_date = tokens[1].clone();
                }
            } else if state
                .database_status
                .has("_pdbx_database_status.recvd_initial_deposition_date")
            {
                if let Some(v) = state
                    .database_status
                    .value(&tokens, "_pdbx_database_status.recvd_initial_deposition_date")
                {
                    scan.meta.deposition_date = v.to_string();
                }
            } else if read_seqres && line.starts_with("_entity_poly.") {
                if state.in_loop {
                    state.entity_poly.declare(&tokens[0]);
                } else if tokens.len() > 1 {
                    if tokens[0] == "_entity_poly.entity_id" {
                        scan.entity_id = tokens[1].clone();
                    } else if tokens[0] == "_entity_poly.pdbx_strand_id" {
                        scan.set_strand(trim_quotes(&tokens[1]).to_string());
                    }
                }
            } else if read_seqres
                && state.entity_poly.has("_entity_poly.entity_id")
                && state.entity_poly.has("_entity_poly.pdbx_strand_id")
            {
                complete_row(
                    &lines,
                    &mut l,
                    &mut tokens,
                    state.entity_poly.width(),
                    "_entity_poly",
                )?;
                scan.entity_id = state
                    .entity_poly
                    .value(&tokens, "_entity_poly.entity_id")
                    .unwrap_or("")
                    .to_string();
                let strand = state
                    .entity_poly
                    .value(&tokens, "_entity_poly.pdbx_strand_id")
                    .unwrap_or("")
                    .to_string();
                scan.set_strand(strand);
            } else if read_seqres && line.starts_with("_entity_poly_seq.") && state.in_loop {
                state.entity_poly_seq.declare(&tokens[0]);
            } else if read_seqres
                && state.entity_poly_seq.has("_entity_poly_seq.entity_id")
                && state.entity_poly_seq.has("_entity_poly_seq.mon_id")
            {
                let entity = state
                    .entity_poly_seq
                    .value(&tokens, "_entity_poly_seq.entity_id")
                    .unwrap_or("")
                    .to_string();
                let mon = state
                    .entity_poly_seq
                    .value(&tokens, "_entity_poly_seq.mon_id")
                    .unwrap_or("")
                    .to_string();
                scan.push_residue(&entity, &mon);
            } else if line.starts_with("_pdbx_audit_revision_history.") {
                if state.in_loop {
                    state.revision_history.declare(&tokens[0]);
                } else if tokens.len() > 1
                    && tokens[0] == "_pdbx_audit_revision_history.revision_date"
                {
                    scan.meta.revision_date = tokens[1].clone();
                }
            } else if state
                .revision_history
                .has("_pdbx_audit_revision_history.revision_date")
                && scan.meta.revision_date.is_empty()
            {
                if let Some(v) = state
                    .revision_history
                    .value(&tokens, "_pdbx_audit_revision_history.revision_date")
                {
                    scan.meta.revision_date = v.to_string();
                }
            } else if line.starts_with("_citation.") {
                if state.in_loop {
                    state.citation.declare(&tokens[0]);
                } else {
                    complete_row(&lines, &mut l, &mut tokens, 2, "_citation")?;
                    scan.read_citation_value(&tokens[0], trim_quotes(&tokens[1]));
                }
            } else if !state.citation.is_empty() {
                complete_row(
                    &lines,
                    &mut l,
                    &mut tokens,
                    state.citation.width(),
                    "_citation",
                )?;
                if !state.citation.has("_citation.id")
                    || state.citation.value(&tokens, "_citation.id") == Some("primary")
                {
                    scan.read_citation_row(&state.citation, &tokens);
                }
            } else if line.starts_with("_cell.") {
                if state.in_loop {
                    state.cell.declare(&tokens[0]);
                } else if tokens.len() > 1 {
                    scan.read_cell_value(&tokens[0], &tokens[1]);
                }
            } else if !state.cell.is_empty() {
                for tag in CELL_TAGS {
                    if let Some(v) = state.cell.value(&tokens, tag) {
                        scan.read_cell_value(tag, v);
                    }
                }
            } else if line.starts_with("_symmetry") {
                if state.in_loop {
                    state.symmetry.declare(&tokens[0]);
                } else if tokens.len() > 1 && tokens[0] == "_symmetry.space_group_name_H-M" {
                    scan.set_space_group(trim_quotes(&tokens[1]));
                }
            } else if state.symmetry.has("_symmetry.space_group_name_H-M") {
                if let Some(v) = state
                    .symmetry
                    .value(&tokens, "_symmetry.space_group_name_H-M")
                {
                    let value = v.to_string();
                    scan.set_space_group(&value);
                }
            } else if line.starts_with("_atom_sites.fract_transf_") {
                if state.in_loop {
                    state.fract_transf.declare(&tokens[0]);
                } else if tokens.len() > 1 {
                    scan.read_scale_value(&tokens[0], &tokens[1]);
                }
            } else if !state.fract_transf.is_empty() {
                for tag in SCALE_TAGS {
                    if let Some(v) = state.fract_transf.value(&tokens, tag) {
                        scan.read_scale_value(tag, v);
                    }
                }
            } else if line.starts_with("_audit_author") {
                state.audit_author.declare(&tokens[0]);
            } else if state.audit_author.has("_audit_author.name") {
                if let Some(v) = state.audit_author.value(&tokens, "_audit_author.name") {
                    scan.meta.authors.push(invert_author(v).to_uppercase());
                }
            } else if line.starts_with("_citation_author") {
                state.citation_author.declare(&tokens[0]);
            } else if state.citation_author.has("_citation_author.name")
                && (!state.citation_author.has("_citation_author.citation_id")
                    || state.citation_author.value(&tokens, "_citation_author.citation_id")
                        == Some("primary"))
            {
                if let Some(v) = state.citation_author.value(&tokens, "_citation_author.name") {
                    scan.meta.citation_authors.push(invert_author(v));
                }
            } else if line.starts_with("_atom_site.") || line.starts_with("_atom_site_anisotrop.") {
                state.atom_site.declare(&tokens[0]);
            } else if !state.atom_site.is_empty() {
                scan.atom_row(&state.atom_site, &tokens);
            }
            l += 1;
        }
        scan.flush_block();
        if scan.atoms.is_empty() {
            return Err(CifError::EmptyStructure);
        }
        if scan.pdb_id.is_empty() {
            scan.pdb_id = "xxxx".to_string();
        }
        scan.sanitize_citation();
        Ok(CifStructure {
            pdb_id: scan.pdb_id,
            meta: scan.meta,
            entities: scan.entities,
            atoms: scan.atoms,
            anisou: scan.anisou,
            chains: scan.chains,
            models: scan.models,
        })
    }
}

const CELL_TAGS: [&str; 7] = [
    "_cell.length_a",
    "_cell.length_b",
    "_cell.length_c",
    "_cell.angle_alpha",
    "_cell.angle_beta",
    "_cell.angle_gamma",
    "_cell.Z_PDB",
];

const SCALE_TAGS: [&str; 12] = [
    "_atom_sites.fract_transf_matrix[1][1]",
    "_atom_sites.fract_transf_matrix[1][2]",
    "_atom_sites.fract_transf_matrix[1][3]",
    "_atom_sites.fract_transf_matrix[2][1]",
    "_atom_sites.fract_transf_matrix[2][2]",
    "_atom_sites.fract_transf_matrix[2][3]",
    "_atom_sites.fract_transf_matrix[3][1]",
    "_atom_sites.fract_transf_matrix[3][2]",
    "_atom_sites.fract_transf_matrix[3][3]",
    "_atom_sites.fract_transf_vector[1]",
    "_atom_sites.fract_transf_vector[2]",
    "_atom_sites.fract_transf_vector[3]",
];

/// Mutable accumulators of one parsing run.
#[derive(Default)]
struct Scan {
    pdb_id: String,
    meta: StructureMeta,
    entities: EntityMeta,
    atoms: Vec<AtomRecord>,
    anisou: HashMap<AnisouKey, String>,
    chains: Vec<ChainStats>,
    models: Vec<String>,
    entity_id: String,
    residues: Vec<String>,
}

impl Scan {
    /// Block terminator: commit any in-flight sequence run.
    fn flush_block(&mut self) {
        self.flush_residues();
        self.entity_id.clear();
    }

    fn flush_residues(&mut self) {
        if self.entity_id.is_empty() || self.residues.is_empty() {
            return;
        }
        if let Ok(id) = self.entity_id.parse::<usize>() {
            self.entities
                .sequences
                .insert(id, std::mem::take(&mut self.residues));
        }
        self.residues.clear();
    }

    fn set_strand(&mut self, strand: String) {
        let Ok(id) = self.entity_id.parse::<usize>() else {
            return;
        };
        while self.entities.strands.len() <= id {
            self.entities.strands.push(String::new());
        }
        self.entities.strands[id] = strand;
    }

    fn push_residue(&mut self, entity: &str, mon: &str) {
        if self.entity_id != entity {
            self.flush_residues();
            self.entity_id = entity.to_string();
        }
        self.residues.push(format!("{:>3}", take_front(mon, 3)));
    }

    fn set_space_group(&mut self, raw: &str) {
        if present(raw) {
            self.meta.cell.space_group = take_front(raw, 11).to_string();
        }
    }

    fn read_citation_value(&mut self, tag: &str, value: &str) {
        let citation = &mut self.meta.citation;
        let value = value.to_string();
        match tag {
            "_citation.title" => citation.title = value,
            "_citation.journal_abbrev" => citation.journal_abbrev = value,
            "_citation.journal_volume" => citation.journal_volume = value,
            "_citation.page_first" => citation.page_first = value,
            "_citation.year" => citation.year = value,
            "_citation.journal_id_ASTM" => citation.journal_id_astm = value,
            "_citation.country" => citation.country = value,
            "_citation.journal_id_ISSN" => citation.journal_id_issn = value,
            "_citation.pdbx_database_id_PubMed" => citation.pubmed_id = value,
            "_citation.pdbx_database_id_DOI" => citation.doi = value,
            _ => {}
        }
    }

    fn read_citation_row(&mut self, dict: &ColumnDict, tokens: &[String]) {
        for tag in [
            "_citation.title",
            "_citation.journal_abbrev",
            "_citation.journal_volume",
            "_citation.page_first",
            "_citation.year",
            "_citation.journal_id_ASTM",
            "_citation.country",
            "_citation.journal_id_ISSN",
            "_citation.pdbx_database_id_PubMed",
            "_citation.pdbx_database_id_DOI",
        ] {
            if let Some(v) = dict.value(tokens, tag) {
                let value = v.to_string();
                self.read_citation_value(tag, &value);
            }
        }
    }

    fn read_cell_value(&mut self, tag: &str, raw: &str) {
        if !present(raw) {
            return;
        }
        let cell = &mut self.meta.cell;
        match tag {
            "_cell.length_a" => cell.length_a = format_fixed(raw, 9, 3),
            "_cell.length_b" => cell.length_b = format_fixed(raw, 9, 3),
            "_cell.length_c" => cell.length_c = format_fixed(raw, 9, 3),
            "_cell.angle_alpha" => cell.angle_alpha = format_fixed(raw, 7, 2),
            "_cell.angle_beta" => cell.angle_beta = format_fixed(raw, 7, 2),
            "_cell.angle_gamma" => cell.angle_gamma = format_fixed(raw, 7, 2),
            "_cell.Z_PDB" => cell.z_value = raw.to_string(),
            _ => {}
        }
    }

    fn read_scale_value(&mut self, tag: &str, raw: &str) {
        if !present(raw) {
            return;
        }
        let (row, col, precision) = match tag {
            "_atom_sites.fract_transf_matrix[1][1]" => (0, 0, 6),
            "_atom_sites.fract_transf_matrix[1][2]" => (0, 1, 6),
            "_atom_sites.fract_transf_matrix[1][3]" => (0, 2, 6),
            "_atom_sites.fract_transf_matrix[2][1]" => (1, 0, 6),
            "_atom_sites.fract_transf_matrix[2][2]" => (1, 1, 6),
            "_atom_sites.fract_transf_matrix[2][3]" => (1, 2, 6),
            "_atom_sites.fract_transf_matrix[3][1]" => (2, 0, 6),
            "_atom_sites.fract_transf_matrix[3][2]" => (2, 1, 6),
            "_atom_sites.fract_transf_matrix[3][3]" => (2, 2, 6),
            "_atom_sites.fract_transf_vector[1]" => (0, 3, 5),
            "_atom_sites.fract_transf_vector[2]" => (1, 3, 5),
            "_atom_sites.fract_transf_vector[3]" => (2, 3, 5),
            _ => return,
        };
        self.meta.scale.rows[row][col] = format_fixed(raw, 10, precision);
    }

    /// One data row of `_atom_site` or `_atom_site_anisotrop`.
    ///
    /// Coordinate rows become [`AtomRecord`]s; tensor rows only register
    /// their formatted `ANISOU` fields under the atom's identity key. The
    /// auth/label/pdbx tag aliases are resolved here, preferring author
    /// numbering, with oversized author names falling back to label names.
    fn atom_row(&mut self, dict: &AtomSiteDict, tokens: &[String]) {
        use AtomField as F;
        let group = GroupKind::from_group_pdb(dict.value(tokens, F::GroupPdb).unwrap_or(""));

        let raw_name = dict
            .value(tokens, F::AuthAtomId)
            .map(|v| {
                if v.len() > 4 {
                    dict.value(tokens, F::LabelAtomId).unwrap_or(v)
                } else {
                    v
                }
            })
            .or_else(|| dict.value(tokens, F::LabelAtomId))
            .or_else(|| {
                dict.value(tokens, F::AnisoAuthAtomId).map(|v| {
                    if v.len() > 4 {
                        dict.value(tokens, F::AnisoLabelAtomId).unwrap_or(v)
                    } else {
                        v
                    }
                })
            })
            .or_else(|| dict.value(tokens, F::AnisoLabelAtomId))
            .unwrap_or("");
        let raw_name = take_front(raw_name, 4);

        let raw_element = dict
            .pick(tokens, &[F::TypeSymbol, F::AnisoTypeSymbol])
            .map(|v| take_front(v, 2).to_string())
            .unwrap_or_else(|| derive_element(raw_name));
        let name = pad_atom_name(raw_name, &raw_element);
        let element = format!("{raw_element:>2}");

        let alt_loc = match dict.pick(tokens, &[F::LabelAltId, F::AnisoLabelAltId]) {
            Some(v) if present(v) => v.chars().next().unwrap_or(' '),
            _ => ' ',
        };

        let raw_res = dict
            .value(tokens, F::AuthCompId)
            .map(|v| {
                if v.len() > 3 {
                    dict.value(tokens, F::LabelCompId).unwrap_or(v)
                } else {
                    v
                }
            })
            .or_else(|| dict.value(tokens, F::LabelCompId))
            .or_else(|| {
                dict.value(tokens, F::AnisoAuthCompId).map(|v| {
                    if v.len() > 3 {
                        dict.value(tokens, F::AnisoLabelCompId).unwrap_or(v)
                    } else {
                        v
                    }
                })
            })
            .or_else(|| dict.value(tokens, F::AnisoLabelCompId))
            .unwrap_or("");
        let res_name = format!("{:>3}", take_front(raw_res, 3));

        let chain_id = dict
            .pick(
                tokens,
                &[
                    F::AuthAsymId,
                    F::LabelAsymId,
                    F::AnisoAuthAsymId,
                    F::AnisoLabelAsymId,
                ],
            )
            .unwrap_or("")
            .to_string();

        let raw_seq = dict
            .pick(
                tokens,
                &[
                    F::AuthSeqId,
                    F::LabelSeqId,
                    F::AnisoAuthSeqId,
                    F::AnisoLabelSeqId,
                ],
            )
            .unwrap_or("");
        let seq_id = if raw_seq.len() > 4 {
            take_back(raw_seq, 4).to_string()
        } else {
            format!("{raw_seq:>4}")
        };

        let insert_code = match dict.pick(tokens, &[F::InsCode, F::AnisoInsCode]) {
            Some(v) if present(v) => v.chars().next().unwrap_or(' '),
            _ => ' ',
        };

        let model = match dict.value(tokens, F::ModelNum) {
            Some(v) if present(v) => format!("{v:>4}"),
            _ => "   1".to_string(),
        };
        if !self.models.iter().any(|m| m == &model) {
            self.models.push(model.clone());
        }
        let first_model = self.models[0] == model;

        let key = AnisouKey {
            name: name.clone(),
            alt_loc,
            res_name: res_name.clone(),
            seq_id: seq_id.clone(),
            insert_code,
            chain_id: chain_id.clone(),
        };

        if dict.has(F::CartnZ) {
            let x = format_fixed(dict.value(tokens, F::CartnX).unwrap_or(""), 8, 3);
            let y = format_fixed(dict.value(tokens, F::CartnY).unwrap_or(""), 8, 3);
            let z = format_fixed(dict.value(tokens, F::CartnZ).unwrap_or(""), 8, 3);
            let occupancy = dict
                .value(tokens, F::Occupancy)
                .map(|v| format_fixed(v, 6, 2))
                .unwrap_or_else(|| "  1.00".to_string());
            let b_factor = dict
                .value(tokens, F::BIso)
                .map(|v| format_fixed(v, 6, 2))
                .unwrap_or_else(|| "  0.00".to_string());
            let charge = format_charge(dict.value(tokens, F::FormalCharge));
            // Residues outside the polymer sequence carry `.` as their
            // label-level sequence number.
            let class = if dict.has(F::LabelSeqId) && dict.value(tokens, F::LabelSeqId) == Some(".")
            {
                if res_name == "HOH" {
                    AtomClass::Water
                } else {
                    AtomClass::Ligand
                }
            } else {
                AtomClass::Polymer
            };
            let record = AtomRecord {
                group,
                class,
                name,
                alt_loc,
                res_name,
                chain_id: chain_id.clone(),
                seq_id,
                insert_code,
                x,
                y,
                z,
                occupancy,
                b_factor,
                element,
                charge,
                model,
            };
            if first_model {
                match self.chains.iter_mut().find(|c| c.id == chain_id) {
                    Some(stats) => {
                        stats.atom_count += 1;
                        stats.hydrogen_count += usize::from(record.is_hydrogen());
                    }
                    None => {
                        let mut stats = ChainStats::new(&chain_id);
                        stats.atom_count = 1;
                        stats.hydrogen_count = usize::from(record.is_hydrogen());
                        self.chains.push(stats);
                    }
                }
            }
            self.atoms.push(record);
        }

        if first_model && dict.has(F::U33) {
            let tensor: String = [F::U11, F::U22, F::U33, F::U12, F::U13, F::U23]
                .iter()
                .map(|f| format_anisou(dict.value(tokens, *f).unwrap_or("")))
                .collect();
            self.anisou.insert(key, tensor);
        }
    }

    /// The archive writes `?` for unknown citation fields; strip those so
    /// the header writer can treat empty as absent.
    fn sanitize_citation(&mut self) {
        let citation = &mut self.meta.citation;
        for field in [
            &mut citation.title,
            &mut citation.journal_abbrev,
            &mut citation.journal_volume,
            &mut citation.page_first,
            &mut citation.year,
            &mut citation.journal_id_astm,
            &mut citation.country,
            &mut citation.journal_id_issn,
            &mut citation.pubmed_id,
            &mut citation.doi,
        ] {
            if *field == "?" || *field == "." {
                field.clear();
            }
        }
    }
}

fn present(value: &str) -> bool {
    !value.is_empty() && value != "?" && value != "."
}

/// `Family, Given` becomes `GivenFamily`, the PDB `AUTHOR` convention.
fn invert_author(raw: &str) -> String {
    let name = trim_quotes(raw);
    match name.split_once(',') {
        Some((family, given)) => format!("{}{}", given.trim_start(), family),
        None => name.to_string(),
    }
}

/// Pads an atom name into columns 13-16. Two-letter elements start in
/// column 13; everything else leaves column 13 for the remoteness digit.
fn pad_atom_name(name: &str, element: &str) -> String {
    let mut padded = name.to_string();
    if element.len() == 2 {
        while padded.len() < 4 {
            padded.push(' ');
        }
    } else {
        if padded.len() == 1 {
            padded.push(' ');
        }
        if padded.len() == 2 {
            padded.push(' ');
        }
        if padded.len() == 3 {
            padded.insert(0, ' ');
        }
    }
    padded
}

/// Guesses the element when `type_symbol` is absent: the first character of
/// the atom name after any leading remoteness digits.
fn derive_element(name: &str) -> String {
    name.trim_start_matches(|c: char| c.is_ascii_digit() || c == ' ')
        .chars()
        .next()
        .map(String::from)
        .unwrap_or_default()
}

fn format_charge(raw: Option<&str>) -> String {
    let value = raw.unwrap_or("?");
    if !present(value) {
        return "  ".to_string();
    }
    let mut charge = if value.len() == 1 {
        if value == "1" {
            "1+".to_string()
        } else {
            format!("{value} ")
        }
    } else {
        take_front(value, 2).to_string()
    };
    if charge.starts_with('+') || charge.starts_with('-') {
        let sign = charge.remove(0);
        charge.push(sign);
    }
    charge
}
