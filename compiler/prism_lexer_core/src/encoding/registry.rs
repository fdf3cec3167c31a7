//! Encoding constants and the alias table used by `Encoding::find`.
//! Generated from the Ruby encoding list; do not edit by hand.

use super::{tables, Class, Encoding, Width};

impl Encoding {
    pub const UTF_8: Encoding = Encoding::new("UTF-8", Width::Utf8, Class::Unicode);
    pub const ASCII_8BIT: Encoding = Encoding::new("ASCII-8BIT", Width::Single, Class::Ascii);
    pub const BIG5: Encoding = Encoding::new("Big5", Width::Big5, Class::Ascii7Bit);
    pub const BIG5_HKSCS: Encoding = Encoding::new("Big5-HKSCS", Width::Big5, Class::Ascii7Bit);
    pub const BIG5_UAO: Encoding = Encoding::new("Big5-UAO", Width::Big5, Class::Ascii7Bit);
    pub const CESU_8: Encoding = Encoding::new("CESU-8", Width::Cesu8, Class::Unicode);
    pub const CP51932: Encoding = Encoding::new("CP51932", Width::EucJp, Class::EucJp);
    pub const CP850: Encoding = Encoding::new("CP850", Width::Single, Class::Table(&tables::CP850));
    pub const CP852: Encoding = Encoding::new("CP852", Width::Single, Class::Table(&tables::CP852));
    pub const CP855: Encoding = Encoding::new("CP855", Width::Single, Class::Table(&tables::CP855));
    pub const CP949: Encoding = Encoding::new("CP949", Width::Cp949, Class::Ascii7Bit);
    pub const CP950: Encoding = Encoding::new("CP950", Width::Big5, Class::Ascii7Bit);
    pub const CP951: Encoding = Encoding::new("CP951", Width::Big5, Class::Ascii7Bit);
    pub const EMACS_MULE: Encoding = Encoding::new("Emacs-Mule", Width::EmacsMule, Class::Ascii7Bit);
    pub const EUC_JP: Encoding = Encoding::new("EUC-JP", Width::EucJp, Class::EucJp);
    pub const EUC_JP_MS: Encoding = Encoding::new("eucJP-ms", Width::EucJp, Class::EucJp);
    pub const EUC_JIS_2004: Encoding = Encoding::new("EUC-JIS-2004", Width::EucJp, Class::EucJp);
    pub const EUC_KR: Encoding = Encoding::new("EUC-KR", Width::EucKr, Class::Ascii7Bit);
    pub const EUC_TW: Encoding = Encoding::new("EUC-TW", Width::EucTw, Class::Ascii7Bit);
    pub const GB12345: Encoding = Encoding::new("GB12345", Width::EucKr, Class::Ascii7Bit);
    pub const GB18030: Encoding = Encoding::new("GB18030", Width::Gb18030, Class::Ascii7Bit);
    pub const GB1988: Encoding = Encoding::new("GB1988", Width::Single, Class::Table(&tables::GB1988));
    pub const GB2312: Encoding = Encoding::new("GB2312", Width::EucKr, Class::Ascii7Bit);
    pub const GBK: Encoding = Encoding::new("GBK", Width::Gbk, Class::Ascii7Bit);
    pub const IBM437: Encoding = Encoding::new("IBM437", Width::Single, Class::Table(&tables::IBM437));
    pub const IBM720: Encoding = Encoding::new("IBM720", Width::Single, Class::Table(&tables::IBM720));
    pub const IBM737: Encoding = Encoding::new("IBM737", Width::Single, Class::Table(&tables::IBM737));
    pub const IBM775: Encoding = Encoding::new("IBM775", Width::Single, Class::Table(&tables::IBM775));
    pub const IBM852: Encoding = Encoding::new("IBM852", Width::Single, Class::Table(&tables::IBM852));
    pub const IBM855: Encoding = Encoding::new("IBM855", Width::Single, Class::Table(&tables::IBM855));
    pub const IBM857: Encoding = Encoding::new("IBM857", Width::Single, Class::Table(&tables::IBM857));
    pub const IBM860: Encoding = Encoding::new("IBM860", Width::Single, Class::Table(&tables::IBM860));
    pub const IBM861: Encoding = Encoding::new("IBM861", Width::Single, Class::Table(&tables::IBM861));
    pub const IBM862: Encoding = Encoding::new("IBM862", Width::Single, Class::Table(&tables::IBM862));
    pub const IBM863: Encoding = Encoding::new("IBM863", Width::Single, Class::Table(&tables::IBM863));
    pub const IBM864: Encoding = Encoding::new("IBM864", Width::Single, Class::Table(&tables::IBM864));
    pub const IBM865: Encoding = Encoding::new("IBM865", Width::Single, Class::Table(&tables::IBM865));
    pub const IBM866: Encoding = Encoding::new("IBM866", Width::Single, Class::Table(&tables::IBM866));
    pub const IBM869: Encoding = Encoding::new("IBM869", Width::Single, Class::Table(&tables::IBM869));
    pub const ISO_8859_1: Encoding = Encoding::new("ISO-8859-1", Width::Single, Class::Table(&tables::ISO_8859_1));
    pub const ISO_8859_2: Encoding = Encoding::new("ISO-8859-2", Width::Single, Class::Table(&tables::ISO_8859_2));
    pub const ISO_8859_3: Encoding = Encoding::new("ISO-8859-3", Width::Single, Class::Table(&tables::ISO_8859_3));
    pub const ISO_8859_4: Encoding = Encoding::new("ISO-8859-4", Width::Single, Class::Table(&tables::ISO_8859_4));
    pub const ISO_8859_5: Encoding = Encoding::new("ISO-8859-5", Width::Single, Class::Table(&tables::ISO_8859_5));
    pub const ISO_8859_6: Encoding = Encoding::new("ISO-8859-6", Width::Single, Class::Table(&tables::ISO_8859_6));
    pub const ISO_8859_7: Encoding = Encoding::new("ISO-8859-7", Width::Single, Class::Table(&tables::ISO_8859_7));
    pub const ISO_8859_8: Encoding = Encoding::new("ISO-8859-8", Width::Single, Class::Table(&tables::ISO_8859_8));
    pub const ISO_8859_9: Encoding = Encoding::new("ISO-8859-9", Width::Single, Class::Table(&tables::ISO_8859_9));
    pub const ISO_8859_10: Encoding = Encoding::new("ISO-8859-10", Width::Single, Class::Table(&tables::ISO_8859_10));
    pub const ISO_8859_11: Encoding = Encoding::new("ISO-8859-11", Width::Single, Class::Table(&tables::ISO_8859_11));
    pub const ISO_8859_13: Encoding = Encoding::new("ISO-8859-13", Width::Single, Class::Table(&tables::ISO_8859_13));
    pub const ISO_8859_14: Encoding = Encoding::new("ISO-8859-14", Width::Single, Class::Table(&tables::ISO_8859_14));
    pub const ISO_8859_15: Encoding = Encoding::new("ISO-8859-15", Width::Single, Class::Table(&tables::ISO_8859_15));
    pub const ISO_8859_16: Encoding = Encoding::new("ISO-8859-16", Width::Single, Class::Table(&tables::ISO_8859_16));
    pub const KOI8_R: Encoding = Encoding::new("KOI8-R", Width::Single, Class::Table(&tables::KOI8_R));
    pub const KOI8_U: Encoding = Encoding::new("KOI8-U", Width::Single, Class::Table(&tables::KOI8_U));
    pub const MAC_CENT_EURO: Encoding = Encoding::new("macCentEuro", Width::Single, Class::Table(&tables::MAC_CENT_EURO));
    pub const MAC_CROATIAN: Encoding = Encoding::new("macCroatian", Width::Single, Class::Table(&tables::MAC_CROATIAN));
    pub const MAC_CYRILLIC: Encoding = Encoding::new("macCyrillic", Width::Single, Class::Table(&tables::MAC_CYRILLIC));
    pub const MAC_GREEK: Encoding = Encoding::new("macGreek", Width::Single, Class::Table(&tables::MAC_GREEK));
    pub const MAC_ICELAND: Encoding = Encoding::new("macIceland", Width::Single, Class::Table(&tables::MAC_ICELAND));
    pub const MAC_JAPANESE: Encoding = Encoding::new("MacJapanese", Width::ShiftJis, Class::ShiftJis);
    pub const MAC_ROMAN: Encoding = Encoding::new("macRoman", Width::Single, Class::Table(&tables::MAC_ROMAN));
    pub const MAC_ROMANIA: Encoding = Encoding::new("macRomania", Width::Single, Class::Table(&tables::MAC_ROMANIA));
    pub const MAC_THAI: Encoding = Encoding::new("macThai", Width::Single, Class::Table(&tables::MAC_THAI));
    pub const MAC_TURKISH: Encoding = Encoding::new("macTurkish", Width::Single, Class::Table(&tables::MAC_TURKISH));
    pub const MAC_UKRAINE: Encoding = Encoding::new("macUkraine", Width::Single, Class::Table(&tables::MAC_UKRAINE));
    pub const SHIFT_JIS: Encoding = Encoding::new("Shift_JIS", Width::ShiftJis, Class::ShiftJis);
    pub const SJIS_DOCOMO: Encoding = Encoding::new("SJIS-DoCoMo", Width::ShiftJis, Class::ShiftJis);
    pub const SJIS_KDDI: Encoding = Encoding::new("SJIS-KDDI", Width::ShiftJis, Class::ShiftJis);
    pub const SJIS_SOFTBANK: Encoding = Encoding::new("SJIS-SoftBank", Width::ShiftJis, Class::ShiftJis);
    pub const STATELESS_ISO_2022_JP: Encoding = Encoding::new("stateless-ISO-2022-JP", Width::EmacsMule, Class::Ascii7Bit);
    pub const STATELESS_ISO_2022_JP_KDDI: Encoding = Encoding::new("stateless-ISO-2022-JP-KDDI", Width::EmacsMule, Class::Ascii7Bit);
    pub const TIS_620: Encoding = Encoding::new("TIS-620", Width::Single, Class::Table(&tables::TIS_620));
    pub const US_ASCII: Encoding = Encoding::new("US-ASCII", Width::UsAscii, Class::Ascii);
    pub const UTF8_MAC: Encoding = Encoding::new("UTF8-MAC", Width::Utf8, Class::Unicode);
    pub const UTF8_DOCOMO: Encoding = Encoding::new("UTF8-DoCoMo", Width::Utf8, Class::Unicode);
    pub const UTF8_KDDI: Encoding = Encoding::new("UTF8-KDDI", Width::Utf8, Class::Unicode);
    pub const UTF8_SOFTBANK: Encoding = Encoding::new("UTF8-SoftBank", Width::Utf8, Class::Unicode);
    pub const WINDOWS_1250: Encoding = Encoding::new("Windows-1250", Width::Single, Class::Table(&tables::WINDOWS_1250));
    pub const WINDOWS_1251: Encoding = Encoding::new("Windows-1251", Width::Single, Class::Table(&tables::WINDOWS_1251));
    pub const WINDOWS_1252: Encoding = Encoding::new("Windows-1252", Width::Single, Class::Table(&tables::WINDOWS_1252));
    pub const WINDOWS_1253: Encoding = Encoding::new("Windows-1253", Width::Single, Class::Table(&tables::WINDOWS_1253));
    pub const WINDOWS_1254: Encoding = Encoding::new("Windows-1254", Width::Single, Class::Table(&tables::WINDOWS_1254));
    pub const WINDOWS_1255: Encoding = Encoding::new("Windows-1255", Width::Single, Class::Table(&tables::WINDOWS_1255));
    pub const WINDOWS_1256: Encoding = Encoding::new("Windows-1256", Width::Single, Class::Table(&tables::WINDOWS_1256));
    pub const WINDOWS_1257: Encoding = Encoding::new("Windows-1257", Width::Single, Class::Table(&tables::WINDOWS_1257));
    pub const WINDOWS_1258: Encoding = Encoding::new("Windows-1258", Width::Single, Class::Table(&tables::WINDOWS_1258));
    pub const WINDOWS_31J: Encoding = Encoding::new("Windows-31J", Width::ShiftJis, Class::ShiftJis);
    pub const WINDOWS_874: Encoding = Encoding::new("Windows-874", Width::Single, Class::Table(&tables::WINDOWS_874));
}

pub(super) static ALL: [Encoding; 90] = [
    Encoding::UTF_8,
    Encoding::ASCII_8BIT,
    Encoding::BIG5,
    Encoding::BIG5_HKSCS,
    Encoding::BIG5_UAO,
    Encoding::CESU_8,
    Encoding::CP51932,
    Encoding::CP850,
    Encoding::CP852,
    Encoding::CP855,
    Encoding::CP949,
    Encoding::CP950,
    Encoding::CP951,
    Encoding::EMACS_MULE,
    Encoding::EUC_JP,
    Encoding::EUC_JP_MS,
    Encoding::EUC_JIS_2004,
    Encoding::EUC_KR,
    Encoding::EUC_TW,
    Encoding::GB12345,
    Encoding::GB18030,
    Encoding::GB1988,
    Encoding::GB2312,
    Encoding::GBK,
    Encoding::IBM437,
    Encoding::IBM720,
    Encoding::IBM737,
    Encoding::IBM775,
    Encoding::IBM852,
    Encoding::IBM855,
    Encoding::IBM857,
    Encoding::IBM860,
    Encoding::IBM861,
    Encoding::IBM862,
    Encoding::IBM863,
    Encoding::IBM864,
    Encoding::IBM865,
    Encoding::IBM866,
    Encoding::IBM869,
    Encoding::ISO_8859_1,
    Encoding::ISO_8859_2,
    Encoding::ISO_8859_3,
    Encoding::ISO_8859_4,
    Encoding::ISO_8859_5,
    Encoding::ISO_8859_6,
    Encoding::ISO_8859_7,
    Encoding::ISO_8859_8,
    Encoding::ISO_8859_9,
    Encoding::ISO_8859_10,
    Encoding::ISO_8859_11,
    Encoding::ISO_8859_13,
    Encoding::ISO_8859_14,
    Encoding::ISO_8859_15,
    Encoding::ISO_8859_16,
    Encoding::KOI8_R,
    Encoding::KOI8_U,
    Encoding::MAC_CENT_EURO,
    Encoding::MAC_CROATIAN,
    Encoding::MAC_CYRILLIC,
    Encoding::MAC_GREEK,
    Encoding::MAC_ICELAND,
    Encoding::MAC_JAPANESE,
    Encoding::MAC_ROMAN,
    Encoding::MAC_ROMANIA,
    Encoding::MAC_THAI,
    Encoding::MAC_TURKISH,
    Encoding::MAC_UKRAINE,
    Encoding::SHIFT_JIS,
    Encoding::SJIS_DOCOMO,
    Encoding::SJIS_KDDI,
    Encoding::SJIS_SOFTBANK,
    Encoding::STATELESS_ISO_2022_JP,
    Encoding::STATELESS_ISO_2022_JP_KDDI,
    Encoding::TIS_620,
    Encoding::US_ASCII,
    Encoding::UTF8_MAC,
    Encoding::UTF8_DOCOMO,
    Encoding::UTF8_KDDI,
    Encoding::UTF8_SOFTBANK,
    Encoding::WINDOWS_1250,
    Encoding::WINDOWS_1251,
    Encoding::WINDOWS_1252,
    Encoding::WINDOWS_1253,
    Encoding::WINDOWS_1254,
    Encoding::WINDOWS_1255,
    Encoding::WINDOWS_1256,
    Encoding::WINDOWS_1257,
    Encoding::WINDOWS_1258,
    Encoding::WINDOWS_31J,
    Encoding::WINDOWS_874,
];

/// Names accepted by `Encoding::find`, matched ignoring ASCII case.
pub(super) static ALIASES: &[(&str, Encoding)] = &[
    ("ASCII", Encoding::US_ASCII),
    ("ASCII-8BIT", Encoding::ASCII_8BIT),
    ("ANSI_X3.4-1968", Encoding::US_ASCII),
    ("BINARY", Encoding::ASCII_8BIT),
    ("Big5", Encoding::BIG5),
    ("Big5-HKSCS", Encoding::BIG5_HKSCS),
    ("Big5-HKSCS:2008", Encoding::BIG5_HKSCS),
    ("Big5-UAO", Encoding::BIG5_UAO),
    ("CESU-8", Encoding::CESU_8),
    ("CP437", Encoding::IBM437),
    ("CP720", Encoding::IBM720),
    ("CP737", Encoding::IBM737),
    ("CP775", Encoding::IBM775),
    ("CP850", Encoding::CP850),
    ("CP852", Encoding::CP852),
    ("CP855", Encoding::CP855),
    ("CP857", Encoding::IBM857),
    ("CP860", Encoding::IBM860),
    ("CP861", Encoding::IBM861),
    ("CP862", Encoding::IBM862),
    ("CP864", Encoding::IBM864),
    ("CP865", Encoding::IBM865),
    ("CP866", Encoding::IBM866),
    ("CP869", Encoding::IBM869),
    ("CP874", Encoding::WINDOWS_874),
    ("CP878", Encoding::KOI8_R),
    ("CP863", Encoding::IBM863),
    ("CP932", Encoding::WINDOWS_31J),
    ("csWindows31J", Encoding::WINDOWS_31J),
    ("CP936", Encoding::GBK),
    ("CP949", Encoding::CP949),
    ("CP950", Encoding::CP950),
    ("CP951", Encoding::CP951),
    ("CP1250", Encoding::WINDOWS_1250),
    ("CP1251", Encoding::WINDOWS_1251),
    ("CP1252", Encoding::WINDOWS_1252),
    ("CP1253", Encoding::WINDOWS_1253),
    ("CP1254", Encoding::WINDOWS_1254),
    ("CP1255", Encoding::WINDOWS_1255),
    ("CP1256", Encoding::WINDOWS_1256),
    ("CP1257", Encoding::WINDOWS_1257),
    ("CP1258", Encoding::WINDOWS_1258),
    ("CP51932", Encoding::CP51932),
    ("CP65001", Encoding::UTF_8),
    ("EUC-JP", Encoding::EUC_JP),
    ("eucJP", Encoding::EUC_JP),
    ("eucJP-ms", Encoding::EUC_JP_MS),
    ("euc-jp-ms", Encoding::EUC_JP_MS),
    ("EUC-JIS-2004", Encoding::EUC_JIS_2004),
    ("EUC-JISX0213", Encoding::EUC_JIS_2004),
    ("EUC-KR", Encoding::EUC_KR),
    ("eucKR", Encoding::EUC_KR),
    ("EUC-CN", Encoding::GB2312),
    ("eucCN", Encoding::GB2312),
    ("EUC-TW", Encoding::EUC_TW),
    ("eucTW", Encoding::EUC_TW),
    ("Emacs-Mule", Encoding::EMACS_MULE),
    ("GBK", Encoding::GBK),
    ("GB12345", Encoding::GB12345),
    ("GB18030", Encoding::GB18030),
    ("GB1988", Encoding::GB1988),
    ("GB2312", Encoding::GB2312),
    ("IBM437", Encoding::IBM437),
    ("IBM720", Encoding::IBM720),
    ("IBM737", Encoding::IBM737),
    ("IBM775", Encoding::IBM775),
    ("IBM850", Encoding::CP850),
    ("IBM852", Encoding::IBM852),
    ("IBM855", Encoding::IBM855),
    ("IBM857", Encoding::IBM857),
    ("IBM860", Encoding::IBM860),
    ("IBM861", Encoding::IBM861),
    ("IBM862", Encoding::IBM862),
    ("IBM863", Encoding::IBM863),
    ("IBM864", Encoding::IBM864),
    ("IBM865", Encoding::IBM865),
    ("IBM866", Encoding::IBM866),
    ("IBM869", Encoding::IBM869),
    ("ISO-8859-1", Encoding::ISO_8859_1),
    ("ISO8859-1", Encoding::ISO_8859_1),
    ("ISO-8859-2", Encoding::ISO_8859_2),
    ("ISO8859-2", Encoding::ISO_8859_2),
    ("ISO-8859-3", Encoding::ISO_8859_3),
    ("ISO8859-3", Encoding::ISO_8859_3),
    ("ISO-8859-4", Encoding::ISO_8859_4),
    ("ISO8859-4", Encoding::ISO_8859_4),
    ("ISO-8859-5", Encoding::ISO_8859_5),
    ("ISO8859-5", Encoding::ISO_8859_5),
    ("ISO-8859-6", Encoding::ISO_8859_6),
    ("ISO8859-6", Encoding::ISO_8859_6),
    ("ISO-8859-7", Encoding::ISO_8859_7),
    ("ISO8859-7", Encoding::ISO_8859_7),
    ("ISO-8859-8", Encoding::ISO_8859_8),
    ("ISO8859-8", Encoding::ISO_8859_8),
    ("ISO-8859-9", Encoding::ISO_8859_9),
    ("ISO8859-9", Encoding::ISO_8859_9),
    ("ISO-8859-10", Encoding::ISO_8859_10),
    ("ISO8859-10", Encoding::ISO_8859_10),
    ("ISO-8859-11", Encoding::ISO_8859_11),
    ("ISO8859-11", Encoding::ISO_8859_11),
    ("ISO-8859-13", Encoding::ISO_8859_13),
    ("ISO8859-13", Encoding::ISO_8859_13),
    ("ISO-8859-14", Encoding::ISO_8859_14),
    ("ISO8859-14", Encoding::ISO_8859_14),
    ("ISO-8859-15", Encoding::ISO_8859_15),
    ("ISO8859-15", Encoding::ISO_8859_15),
    ("ISO-8859-16", Encoding::ISO_8859_16),
    ("ISO8859-16", Encoding::ISO_8859_16),
    ("KOI8-R", Encoding::KOI8_R),
    ("KOI8-U", Encoding::KOI8_U),
    ("macCentEuro", Encoding::MAC_CENT_EURO),
    ("macCroatian", Encoding::MAC_CROATIAN),
    ("macCyrillic", Encoding::MAC_CYRILLIC),
    ("macGreek", Encoding::MAC_GREEK),
    ("macIceland", Encoding::MAC_ICELAND),
    ("MacJapanese", Encoding::MAC_JAPANESE),
    ("MacJapan", Encoding::MAC_JAPANESE),
    ("macRoman", Encoding::MAC_ROMAN),
    ("macRomania", Encoding::MAC_ROMANIA),
    ("macThai", Encoding::MAC_THAI),
    ("macTurkish", Encoding::MAC_TURKISH),
    ("macUkraine", Encoding::MAC_UKRAINE),
    ("PCK", Encoding::WINDOWS_31J),
    ("Shift_JIS", Encoding::SHIFT_JIS),
    ("SJIS", Encoding::WINDOWS_31J),
    ("SJIS-DoCoMo", Encoding::SJIS_DOCOMO),
    ("SJIS-KDDI", Encoding::SJIS_KDDI),
    ("SJIS-SoftBank", Encoding::SJIS_SOFTBANK),
    ("stateless-ISO-2022-JP", Encoding::STATELESS_ISO_2022_JP),
    ("stateless-ISO-2022-JP-KDDI", Encoding::STATELESS_ISO_2022_JP_KDDI),
    ("TIS-620", Encoding::TIS_620),
    ("US-ASCII", Encoding::US_ASCII),
    ("UTF8-MAC", Encoding::UTF8_MAC),
    ("UTF-8-HFS", Encoding::UTF8_MAC),
    ("UTF8-DoCoMo", Encoding::UTF8_DOCOMO),
    ("UTF8-KDDI", Encoding::UTF8_KDDI),
    ("UTF8-SoftBank", Encoding::UTF8_SOFTBANK),
    ("Windows-31J", Encoding::WINDOWS_31J),
    ("Windows-874", Encoding::WINDOWS_874),
    ("Windows-1250", Encoding::WINDOWS_1250),
    ("Windows-1251", Encoding::WINDOWS_1251),
    ("Windows-1252", Encoding::WINDOWS_1252),
    ("Windows-1253", Encoding::WINDOWS_1253),
    ("Windows-1254", Encoding::WINDOWS_1254),
    ("Windows-1255", Encoding::WINDOWS_1255),
    ("Windows-1256", Encoding::WINDOWS_1256),
    ("Windows-1257", Encoding::WINDOWS_1257),
    ("Windows-1258", Encoding::WINDOWS_1258),
    ("646", Encoding::US_ASCII),
];
