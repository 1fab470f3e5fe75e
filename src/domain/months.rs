/// Month names as rendered to the user, 1-indexed (January = 1).
pub const KUUKAUDET: [&str; 12] = [
    "Tammikuu",
    "Helmikuu",
    "Maaliskuu",
    "Huhtikuu",
    "Toukokuu",
    "Kesäkuu",
    "Heinäkuu",
    "Elokuu",
    "Syyskuu",
    "Lokakuu",
    "Marraskuu",
    "Joulukuu",
];

pub fn month_name(month: i64) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    KUUKAUDET.get(index).copied()
}
