//! vCard 3.0 mapping.

use cardex_core::constants::CATEGORY_LABEL;
use cardex_rfc::rfc::vcard::core::names;
use cardex_rfc::rfc::vcard::{self, StructuredName, VCard, VCardProperty};

use super::record::ContactRecord;

/// Builds the card for one record.
///
/// N, FN and CATEGORIES are always present; the other properties are
/// omitted when their value is empty.
#[must_use]
pub fn to_vcard(record: &ContactRecord) -> VCard {
    let mut card = VCard::new();

    card.add_property(VCardProperty::structured_name(StructuredName::simple(
        record.last_name.as_str(),
        record.first_name.as_str(),
    )));
    card.add_property(VCardProperty::text(names::FN, record.full_name()));

    card.add_if_present(
        VCardProperty::text(names::TEL, record.phone.as_str()).with_types(["CELL", "VOICE"]),
    );
    card.add_if_present(
        VCardProperty::text(names::EMAIL, record.email.as_str()).with_types(["INTERNET"]),
    );
    card.add_if_present(VCardProperty::text(names::X_ZONE, record.zone.as_str()));
    card.add_if_present(VCardProperty::text(names::X_STAKE, record.stake.as_str()));
    card.add_if_present(
        VCardProperty::text(names::X_RELEASE, record.release.as_str()).with_types(["RELEASE"]),
    );

    card.add_property(VCardProperty::text_list(names::CATEGORIES, [CATEGORY_LABEL]));

    card
}

/// Serializes records to concatenated vCard blocks. No records yields `""`.
#[must_use]
pub fn serialize(records: &[ContactRecord]) -> String {
    let cards: Vec<VCard> = records.iter().map(to_vcard).collect();
    vcard::serialize(&cards)
}
