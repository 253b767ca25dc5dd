//! Hand-written Reflect impls fed with compiler-style signatures

use enum_names::{
    Absent, DelimiterRule, EnumRange, Override, Reflect, Signature, for_each, name_of,
    name_table, value_of,
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Legacy {
    Alpha = 0,
    Beta = 1,
    Gamma = 3,
}

const PREFIX: &str = "static mgutility::string_view mgutility::detail::enum_type::name()";

macro_rules! clang_signature {
    ($tail:literal) => {
        concat!(
            "static mgutility::string_view mgutility::detail::enum_type::name()",
            " [Enum = legacy, e = ",
            $tail,
            "]"
        )
    };
}

impl Reflect for Legacy {
    type Repr = i32;
    type Bitmask = Absent;

    const RANGE: EnumRange = EnumRange::between(0, 4);

    const SIGNATURES: &'static [Signature] = &[
        Signature::new(0, clang_signature!("legacy::Alpha")),
        Signature::new(1, clang_signature!("legacy::Beta")),
        // How a compiler renders a value with no enumerator.
        Signature::new(2, clang_signature!("(legacy)2")),
        Signature::new(3, clang_signature!("legacy::Gamma")),
    ];

    const OVERRIDES: &'static [Override] = &[Override::new(3, "gamma")];

    const RULE: DelimiterRule = DelimiterRule::CLANG.scoped();

    fn underlying(self) -> i32 {
        self as i32
    }

    fn from_underlying(value: i64) -> Option<Self> {
        match value {
            0 => Some(Legacy::Alpha),
            1 => Some(Legacy::Beta),
            3 => Some(Legacy::Gamma),
            _ => None,
        }
    }
}

#[test]
fn test_signature_prefix_is_stable() {
    assert!(Legacy::SIGNATURES.iter().all(|sig| sig.text.starts_with(PREFIX)));
}

#[test]
fn test_scanned_names() {
    assert_eq!(name_of(Legacy::Alpha), "Alpha");
    assert_eq!(name_of(Legacy::Beta), "Beta");
    assert_eq!(value_of::<Legacy>("Beta"), Some(Legacy::Beta));
}

#[test]
fn test_override_beats_signature() {
    assert_eq!(name_of(Legacy::Gamma), "gamma");
    assert_eq!(value_of::<Legacy>("Gamma"), None);
}

#[test]
fn test_cast_rendering_is_unnamed() {
    let table = name_table::<Legacy>(Legacy::RANGE);
    assert_eq!(table.len(), 6);
    assert_eq!(table.get(0), Some(""));
    let entries: Vec<_> = table.entries().collect();
    assert_eq!(
        entries,
        [(0, "Alpha"), (1, "Beta"), (2, ""), (3, "gamma"), (4, "")]
    );
    assert_eq!(table.named_count(), 3);
}

#[test]
fn test_offsets() {
    let table = name_table::<Legacy>(Legacy::RANGE);
    assert_eq!(table.offset_of(0), Some(1));
    assert_eq!(table.offset_of(4), Some(5));
    assert_eq!(table.offset_of(5), None);
    assert_eq!(table.offset_of(-1), None);
    assert_eq!(table.value_at(0), None);
    assert_eq!(table.value_at(2), Some(1));
}

#[test]
fn test_iteration_uses_hand_written_conversion() {
    let names: Vec<_> = for_each::<Legacy>().map(|p| p.name).collect();
    assert_eq!(names, ["Alpha", "Beta", "gamma"]);
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Msvc(i32);

macro_rules! msvc_signature {
    ($tail:literal) => {
        concat!(
            "class mgutility::string_view __cdecl mgutility::detail::enum_type::name<enum rgb_color,",
            $tail,
            "xxxxxxxxxxxxxxxxxxxx"
        )
    };
}

impl Reflect for Msvc {
    type Repr = i32;
    type Bitmask = Absent;

    const RANGE: EnumRange = EnumRange::between(0, 5);

    const SIGNATURES: &'static [Signature] = &[
        Signature::new(4, msvc_signature!("blue")),
        Signature::new(5, msvc_signature!("(enum rgb_color)0x5")),
    ];

    const RULE: DelimiterRule = DelimiterRule::MSVC;

    fn underlying(self) -> i32 {
        self.0
    }

    fn from_underlying(value: i64) -> Option<Self> {
        i32::try_from(value).ok().map(Msvc)
    }
}

#[test]
fn test_msvc_cast_text_never_named() {
    assert_eq!(name_of(Msvc(4)), "blue");
    assert_eq!(name_of(Msvc(5)), "");
    assert_eq!(value_of::<Msvc>("(enum rgb_color)0x5"), None);
    assert_eq!(name_table::<Msvc>(Msvc::RANGE).named_count(), 1);
}
