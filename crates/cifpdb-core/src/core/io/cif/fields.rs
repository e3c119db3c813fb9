//! Column dictionaries for mmCIF categories.
//!
//! A `loop_` header declares one tag per line; the position of each tag is
//! the column index of its values in every following row. `_atom_site` and
//! `_atom_site_anisotrop` are hot enough to get a static enum-indexed table
//! resolved through a [`phf`] map; the metadata categories use a small
//! name-to-index list instead.

use super::line::trim_quotes;

/// Recognized tags of `_atom_site` and `_atom_site_anisotrop`.
///
/// Discriminants index directly into [`AtomSiteDict`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtomField {
    GroupPdb,
    Id,
    TypeSymbol,
    LabelAtomId,
    LabelAltId,
    LabelCompId,
    LabelAsymId,
    LabelEntityId,
    LabelSeqId,
    InsCode,
    CartnX,
    CartnY,
    CartnZ,
    Occupancy,
    BIso,
    FormalCharge,
    AuthSeqId,
    AuthCompId,
    AuthAsymId,
    AuthAtomId,
    ModelNum,
    AnisoId,
    AnisoTypeSymbol,
    AnisoLabelAtomId,
    AnisoLabelAltId,
    AnisoLabelCompId,
    AnisoLabelAsymId,
    AnisoLabelSeqId,
    AnisoInsCode,
    U11,
    U22,
    U33,
    U12,
    U13,
    U23,
    AnisoAuthSeqId,
    AnisoAuthCompId,
    AnisoAuthAsymId,
    AnisoAuthAtomId,
}

impl AtomField {
    pub const COUNT: usize = 39;
}

static ATOM_FIELDS: phf::Map<&'static str, AtomField> = phf::phf_map! {
    "_atom_site.group_PDB" => AtomField::GroupPdb,
    "_atom_site.id" => AtomField::Id,
    "_atom_site.type_symbol" => AtomField::TypeSymbol,
    "_atom_site.label_atom_id" => AtomField::LabelAtomId,
    "_atom_site.label_alt_id" => AtomField::LabelAltId,
    "_atom_site.label_comp_id" => AtomField::LabelCompId,
    "_atom_site.label_asym_id" => AtomField::LabelAsymId,
    "_atom_site.label_entity_id" => AtomField::LabelEntityId,
    "_atom_site.label_seq_id" => AtomField::LabelSeqId,
    "_atom_site.pdbx_PDB_ins_code" => AtomField::InsCode,
    "_atom_site.Cartn_x" => AtomField::CartnX,
    "_atom_site.Cartn_y" => AtomField::CartnY,
    "_atom_site.Cartn_z" => AtomField::CartnZ,
    "_atom_site.occupancy" => AtomField::Occupancy,
    "_atom_site.B_iso_or_equiv" => AtomField::BIso,
    "_atom_site.pdbx_formal_charge" => AtomField::FormalCharge,
    "_atom_site.auth_seq_id" => AtomField::AuthSeqId,
    "_atom_site.auth_comp_id" => AtomField::AuthCompId,
    "_atom_site.auth_asym_id" => AtomField::AuthAsymId,
    "_atom_site.auth_atom_id" => AtomField::AuthAtomId,
    "_atom_site.pdbx_PDB_model_num" => AtomField::ModelNum,
    "_atom_site.aniso_U[1][1]" => AtomField::U11,
    "_atom_site.aniso_U[2][2]" => AtomField::U22,
    "_atom_site.aniso_U[3][3]" => AtomField::U33,
    "_atom_site.aniso_U[1][2]" => AtomField::U12,
    "_atom_site.aniso_U[1][3]" => AtomField::U13,
    "_atom_site.aniso_U[2][3]" => AtomField::U23,
    "_atom_site_anisotrop.id" => AtomField::AnisoId,
    "_atom_site_anisotrop.type_symbol" => AtomField::AnisoTypeSymbol,
    "_atom_site_anisotrop.pdbx_label_atom_id" => AtomField::AnisoLabelAtomId,
    "_atom_site_anisotrop.pdbx_label_alt_id" => AtomField::AnisoLabelAltId,
    "_atom_site_anisotrop.pdbx_label_comp_id" => AtomField::AnisoLabelCompId,
    "_atom_site_anisotrop.pdbx_label_asym_id" => AtomField::AnisoLabelAsymId,
    "_atom_site_anisotrop.pdbx_label_seq_id" => AtomField::AnisoLabelSeqId,
    "_atom_site_anisotrop.pdbx_PDB_ins_code" => AtomField::AnisoInsCode,
    "_atom_site_anisotrop.U[1][1]" => AtomField::U11,
    "_atom_site_anisotrop.U[2][2]" => AtomField::U22,
    "_atom_site_anisotrop.U[3][3]" => AtomField::U33,
    "_atom_site_anisotrop.U[1][2]" => AtomField::U12,
    "_atom_site_anisotrop.U[1][3]" => AtomField::U13,
    "_atom_site_anisotrop.U[2][3]" => AtomField::U23,
    "_atom_site_anisotrop.pdbx_auth_seq_id" => AtomField::AnisoAuthSeqId,
    "_atom_site_anisotrop.pdbx_auth_comp_id" => AtomField::AnisoAuthCompId,
    "_atom_site_anisotrop.pdbx_auth_asym_id" => AtomField::AnisoAuthAsymId,
    "_atom_site_anisotrop.pdbx_auth_atom_id" => AtomField::AnisoAuthAtomId,
};

/// Column positions for an `_atom_site` (or `_atom_site_anisotrop`) loop.
#[derive(Debug)]
pub struct AtomSiteDict {
    cols: [Option<usize>; AtomField::COUNT],
    width: usize,
}

impl Default for AtomSiteDict {
    fn default() -> Self {
        Self {
            cols: [None; AtomField::COUNT],
            width: 0,
        }
    }
}

impl AtomSiteDict {
    /// Records the next declared tag. Unrecognized tags still widen the row.
    pub fn declare(&mut self, tag: &str) {
        if let Some(&field) = ATOM_FIELDS.get(tag) {
            self.cols[field as usize] = Some(self.width);
        }
        self.width += 1;
    }

    /// Total number of declared columns, recognized or not.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0
    }

    pub fn has(&self, field: AtomField) -> bool {
        self.cols[field as usize].is_some()
    }

    /// Unquoted value of `field` in `tokens`, if the column was declared.
    pub fn value<'a>(&self, tokens: &'a [String], field: AtomField) -> Option<&'a str> {
        let col = self.cols[field as usize]?;
        tokens.get(col).map(|t| trim_quotes(t))
    }

    /// First of `candidates` whose column is declared; the auth/label/pdbx
    /// fallback chains are expressed as candidate lists.
    pub fn pick<'a>(&self, tokens: &'a [String], candidates: &[AtomField]) -> Option<&'a str> {
        candidates
            .iter()
            .find(|f| self.has(**f))
            .and_then(|f| self.value(tokens, *f))
    }
}

/// Column positions for a low-traffic category, keyed by full tag name.
#[derive(Debug, Default)]
pub struct ColumnDict {
    cols: Vec<(String, usize)>,
    width: usize,
}

impl ColumnDict {
    pub fn declare(&mut self, tag: &str) {
        self.cols.push((tag.to_string(), self.width));
        self.width += 1;
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0
    }

    pub fn has(&self, tag: &str) -> bool {
        self.cols.iter().any(|(name, _)| name == tag)
    }

    pub fn value<'a>(&self, tokens: &'a [String], tag: &str) -> Option<&'a str> {
        let col = self.cols.iter().find(|(name, _)| name == tag)?.1;
        tokens.get(col).map(|t| trim_quotes(t))
    }
}
