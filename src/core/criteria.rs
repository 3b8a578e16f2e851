use crate::core::fees::FeeRange;
use crate::models::School;

/// Address criterion: exact equality with any requested address
///
/// An empty request list never matches.
#[inline]
pub fn matches_address(school: &School, addresses: &[String]) -> bool {
    !addresses.is_empty() && addresses.iter().any(|a| *a == school.address)
}

/// Board criterion: any requested board is a substring of the school's
/// board field
///
/// The stored field may list several affiliations together ("CBSE, IGCSE"),
/// so containment is used instead of equality. An empty request list never
/// matches; a blank entry inside a non-empty list matches every school.
#[inline]
pub fn matches_board(school: &School, boards: &[String]) -> bool {
    !boards.is_empty() && boards.iter().any(|b| school.board.contains(b.as_str()))
}

/// Fee criterion: the school's range lies inside the requested range
///
/// `None` means the request carried no usable range. A school whose own
/// fee string does not parse never matches.
#[inline]
pub fn matches_fees(school: &School, requested: Option<&FeeRange>) -> bool {
    let Some(requested) = requested else {
        return false;
    };

    match FeeRange::parse(&school.fees) {
        Ok(range) => range.is_within(requested),
        Err(e) => {
            tracing::trace!("Skipping fee criterion for school at {}: {}", school.address, e);
            false
        }
    }
}
