use serde::Serialize;

/// Percent identity assigned to a cluster's representative sequence
pub const REPRESENTATIVE_IDENTITY: f64 = 100.0;

/// A single sequence listed as a member of a CD-HIT cluster
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterMember {
    /// Sequence accession as printed in the report (without `>` or `...`)
    pub accession: String,

    /// Rank of the member within its cluster, as printed by CD-HIT
    pub local_id: u32,

    /// Sequence length in amino acids
    pub length: u32,

    /// Percent identity to the cluster representative (0-100)
    pub percent_identity: f64,

    /// Whether CD-HIT marked this member as the cluster representative (`*`)
    pub is_representative: bool,
}

impl ClusterMember {
    pub fn new(
        accession: impl Into<String>,
        local_id: u32,
        length: u32,
        percent_identity: f64,
    ) -> Self {
        Self {
            accession: accession.into(),
            local_id,
            length,
            percent_identity,
            is_representative: false,
        }
    }

    /// Create the member CD-HIT marks with `*`; identity is fixed at 100%.
    pub fn representative(accession: impl Into<String>, local_id: u32, length: u32) -> Self {
        Self {
            accession: accession.into(),
            local_id,
            length,
            percent_identity: REPRESENTATIVE_IDENTITY,
            is_representative: true,
        }
    }

    /// Render the member back into a `.clstr` member line (without newline)
    pub fn to_clstr_line(&self) -> String {
        if self.is_representative {
            format!("{}\t{}aa, >{}... *", self.local_id, self.length, self.accession)
        } else {
            format!(
                "{}\t{}aa, >{}... at {}%",
                self.local_id, self.length, self.accession, self.percent_identity
            )
        }
    }
}
