//! Instrument pack identifiers and their in-game display names.

/// Known instrument pack identifiers and the names the Mandachord editor shows
/// for them, sorted by display name.
pub const KNOWN_PACKS: &[(&str, &str)] = &[
    ("BardTennoPackA", "Adau"),
    ("BardCorpusPackA", "Alpha"),
    ("BardCorpusPackB", "Beta"),
    ("BardCorpusPackD", "Delta"),
    ("BardGrineerPackA", "Druk"),
    ("BardCorpusPackE", "Epsilon"),
    ("BardCorpusPackC", "Gamma"),
    ("BardEDMPackA", "Horos"),
    ("BardGrineerPackB", "Plogg"),
];

/// Returns the display name for an instrument pack identifier.
///
/// Identifiers missing from [`KNOWN_PACKS`] are returned unchanged, so packs
/// added to the game after this table was written still show up by their raw id.
///
/// # Examples
/// ```
/// use mandachord_song::instruments::pack_name;
///
/// assert_eq!(pack_name("BardTennoPackA"), "Adau");
/// assert_eq!(pack_name("UnknownPackZ"), "UnknownPackZ");
/// ```
pub fn pack_name(id: &str) -> &str {
    KNOWN_PACKS
        .iter()
        .find(|(known, _)| *known == id)
        .map(|(_, name)| *name)
        .unwrap_or(id)
}

/// Returns true if `id` has an entry in [`KNOWN_PACKS`].
pub fn is_known_pack(id: &str) -> bool {
    KNOWN_PACKS.iter().any(|(known, _)| *known == id)
}
