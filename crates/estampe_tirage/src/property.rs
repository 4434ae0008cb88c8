//! Property metadata driving attribute serialization.
//!
//! Every prop name with special behavior lives in one static table. Lookup
//! happens once per prop while writing an open tag; names missing from the
//! table fall through to the pass-through attribute path.

use estampe_matrice::PropValue;
use phf::phf_map;

pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// How a prop value maps onto an attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueClass {
    /// Consumed by the renderer itself, never serialized.
    Reserved,
    /// Stringified as-is.
    Plain,
    /// Stringified, with `true` and `false` written out as words.
    BooleanishString,
    /// Present when truthy, written as `attr=""`.
    Boolean,
    /// `true` renders `attr=""`, other truthy values stringify, `false` drops.
    OverloadedBoolean,
    /// Dropped unless the value coerces to a number.
    Numeric,
    /// Dropped unless the value coerces to a number of at least one.
    PositiveNumeric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyInfo {
    pub class: ValueClass,
    /// Attribute name written to the markup, which may differ from the prop.
    pub attribute: &'static str,
    pub namespace: Option<&'static str>,
}

impl PropertyInfo {
    pub const fn accepts_booleans(&self) -> bool {
        matches!(
            self.class,
            ValueClass::BooleanishString | ValueClass::Boolean | ValueClass::OverloadedBoolean
        )
    }
}

const fn reserved(attribute: &'static str) -> PropertyInfo {
    PropertyInfo { class: ValueClass::Reserved, attribute, namespace: None }
}

const fn plain(attribute: &'static str) -> PropertyInfo {
    PropertyInfo { class: ValueClass::Plain, attribute, namespace: None }
}

const fn booleanish(attribute: &'static str) -> PropertyInfo {
    PropertyInfo { class: ValueClass::BooleanishString, attribute, namespace: None }
}

const fn boolean(attribute: &'static str) -> PropertyInfo {
    PropertyInfo { class: ValueClass::Boolean, attribute, namespace: None }
}

const fn overloaded(attribute: &'static str) -> PropertyInfo {
    PropertyInfo { class: ValueClass::OverloadedBoolean, attribute, namespace: None }
}

const fn numeric(attribute: &'static str) -> PropertyInfo {
    PropertyInfo { class: ValueClass::Numeric, attribute, namespace: None }
}

const fn positive_numeric(attribute: &'static str) -> PropertyInfo {
    PropertyInfo { class: ValueClass::PositiveNumeric, attribute, namespace: None }
}

const fn xlink(attribute: &'static str) -> PropertyInfo {
    PropertyInfo { class: ValueClass::Plain, attribute, namespace: Some(XLINK_NAMESPACE) }
}

const fn xml(attribute: &'static str) -> PropertyInfo {
    PropertyInfo { class: ValueClass::Plain, attribute, namespace: Some(XML_NAMESPACE) }
}

static PROPERTIES: phf::Map<&'static str, PropertyInfo> = phf_map! {
    // Reserved props are consumed by the renderer and never serialized.
    "children" => reserved("children"),
    "dangerouslySetInnerHTML" => reserved("dangerouslySetInnerHTML"),
    "defaultValue" => reserved("defaultValue"),
    "defaultChecked" => reserved("defaultChecked"),
    "innerHTML" => reserved("innerHTML"),
    "suppressContentEditableWarning" => reserved("suppressContentEditableWarning"),
    "suppressHydrationWarning" => reserved("suppressHydrationWarning"),
    "style" => reserved("style"),

    // Plain string props whose attribute name differs from the prop name.
    "acceptCharset" => plain("accept-charset"),
    "className" => plain("class"),
    "htmlFor" => plain("for"),
    "httpEquiv" => plain("http-equiv"),

    // Booleanish strings render "true" and "false" as words.
    "contentEditable" => booleanish("contenteditable"),
    "draggable" => booleanish("draggable"),
    "spellCheck" => booleanish("spellcheck"),
    "value" => booleanish("value"),

    // Booleanish SVG attributes keep their casing.
    "autoReverse" => booleanish("autoReverse"),
    "externalResourcesRequired" => booleanish("externalResourcesRequired"),
    "focusable" => booleanish("focusable"),
    "preserveAlpha" => booleanish("preserveAlpha"),

    // Boolean attributes, lowercased in the markup.
    "allowFullScreen" => boolean("allowfullscreen"),
    "async" => boolean("async"),
    "autoFocus" => boolean("autofocus"),
    "autoPlay" => boolean("autoplay"),
    "controls" => boolean("controls"),
    "default" => boolean("default"),
    "defer" => boolean("defer"),
    "disabled" => boolean("disabled"),
    "formNoValidate" => boolean("formnovalidate"),
    "hidden" => boolean("hidden"),
    "loop" => boolean("loop"),
    "noModule" => boolean("nomodule"),
    "noValidate" => boolean("novalidate"),
    "open" => boolean("open"),
    "playsInline" => boolean("playsinline"),
    "readOnly" => boolean("readonly"),
    "required" => boolean("required"),
    "reversed" => boolean("reversed"),
    "scoped" => boolean("scoped"),
    "seamless" => boolean("seamless"),
    "itemScope" => boolean("itemscope"),

    // Boolean form-state attributes whose names survive unchanged.
    "checked" => boolean("checked"),
    "multiple" => boolean("multiple"),
    "muted" => boolean("muted"),
    "selected" => boolean("selected"),

    // Overloaded booleans take `attr=""` for `true` and a string otherwise.
    "capture" => overloaded("capture"),
    "download" => overloaded("download"),

    // Numeric attributes that must be positive.
    "cols" => positive_numeric("cols"),
    "rows" => positive_numeric("rows"),
    "size" => positive_numeric("size"),
    "span" => positive_numeric("span"),

    // Plain numeric attributes.
    "rowSpan" => numeric("rowspan"),
    "start" => numeric("start"),

    // SVG attributes addressed by camelCase props, hyphenated in the markup.
    "accentHeight" => plain("accent-height"),
    "alignmentBaseline" => plain("alignment-baseline"),
    "arabicForm" => plain("arabic-form"),
    "baselineShift" => plain("baseline-shift"),
    "capHeight" => plain("cap-height"),
    "clipPath" => plain("clip-path"),
    "clipRule" => plain("clip-rule"),
    "colorInterpolation" => plain("color-interpolation"),
    "colorInterpolationFilters" => plain("color-interpolation-filters"),
    "colorProfile" => plain("color-profile"),
    "colorRendering" => plain("color-rendering"),
    "dominantBaseline" => plain("dominant-baseline"),
    "enableBackground" => plain("enable-background"),
    "fillOpacity" => plain("fill-opacity"),
    "fillRule" => plain("fill-rule"),
    "floodColor" => plain("flood-color"),
    "floodOpacity" => plain("flood-opacity"),
    "fontFamily" => plain("font-family"),
    "fontSize" => plain("font-size"),
    "fontSizeAdjust" => plain("font-size-adjust"),
    "fontStretch" => plain("font-stretch"),
    "fontStyle" => plain("font-style"),
    "fontVariant" => plain("font-variant"),
    "fontWeight" => plain("font-weight"),
    "glyphName" => plain("glyph-name"),
    "glyphOrientationHorizontal" => plain("glyph-orientation-horizontal"),
    "glyphOrientationVertical" => plain("glyph-orientation-vertical"),
    "horizAdvX" => plain("horiz-adv-x"),
    "horizOriginX" => plain("horiz-origin-x"),
    "imageRendering" => plain("image-rendering"),
    "letterSpacing" => plain("letter-spacing"),
    "lightingColor" => plain("lighting-color"),
    "markerEnd" => plain("marker-end"),
    "markerMid" => plain("marker-mid"),
    "markerStart" => plain("marker-start"),
    "overlinePosition" => plain("overline-position"),
    "overlineThickness" => plain("overline-thickness"),
    "paintOrder" => plain("paint-order"),
    // The digit blocks camelization, so the prop keeps its hyphen.
    "panose-1" => plain("panose-1"),
    "pointerEvents" => plain("pointer-events"),
    "renderingIntent" => plain("rendering-intent"),
    "shapeRendering" => plain("shape-rendering"),
    "stopColor" => plain("stop-color"),
    "stopOpacity" => plain("stop-opacity"),
    "strikethroughPosition" => plain("strikethrough-position"),
    "strikethroughThickness" => plain("strikethrough-thickness"),
    "strokeDasharray" => plain("stroke-dasharray"),
    "strokeDashoffset" => plain("stroke-dashoffset"),
    "strokeLinecap" => plain("stroke-linecap"),
    "strokeLinejoin" => plain("stroke-linejoin"),
    "strokeMiterlimit" => plain("stroke-miterlimit"),
    "strokeOpacity" => plain("stroke-opacity"),
    "strokeWidth" => plain("stroke-width"),
    "textAnchor" => plain("text-anchor"),
    "textDecoration" => plain("text-decoration"),
    "textRendering" => plain("text-rendering"),
    "underlinePosition" => plain("underline-position"),
    "underlineThickness" => plain("underline-thickness"),
    "unicodeBidi" => plain("unicode-bidi"),
    "unicodeRange" => plain("unicode-range"),
    "unitsPerEm" => plain("units-per-em"),
    "vAlphabetic" => plain("v-alphabetic"),
    "vHanging" => plain("v-hanging"),
    "vIdeographic" => plain("v-ideographic"),
    "vMathematical" => plain("v-mathematical"),
    "vectorEffect" => plain("vector-effect"),
    "vertAdvY" => plain("vert-adv-y"),
    "vertOriginX" => plain("vert-origin-x"),
    "vertOriginY" => plain("vert-origin-y"),
    "wordSpacing" => plain("word-spacing"),
    "writingMode" => plain("writing-mode"),
    "xmlnsXlink" => plain("xmlns:xlink"),
    "xHeight" => plain("x-height"),

    // XLink attributes.
    "xlinkActuate" => xlink("xlink:actuate"),
    "xlinkArcrole" => xlink("xlink:arcrole"),
    "xlinkHref" => xlink("xlink:href"),
    "xlinkRole" => xlink("xlink:role"),
    "xlinkShow" => xlink("xlink:show"),
    "xlinkTitle" => xlink("xlink:title"),
    "xlinkType" => xlink("xlink:type"),

    // XML attributes.
    "xmlBase" => xml("xml:base"),
    "xmlLang" => xml("xml:lang"),
    "xmlSpace" => xml("xml:space"),

    // Case-sensitive names shared between HTML and SVG.
    "tabIndex" => plain("tabindex"),
    "crossOrigin" => plain("crossorigin"),
};

pub fn property_info(name: &str) -> Option<&'static PropertyInfo> {
    PROPERTIES.get(name)
}

/// Whether a prop is dropped before the value is even inspected. Reserved
/// names and anything shaped like an event handler never reach the markup.
pub fn should_ignore(name: &str, info: Option<&PropertyInfo>) -> bool {
    if let Some(info) = info {
        return info.class == ValueClass::Reserved;
    }
    let bytes = name.as_bytes();
    bytes.len() > 2
        && (bytes[0] == b'o' || bytes[0] == b'O')
        && (bytes[1] == b'n' || bytes[1] == b'N')
}

/// Whether a prop's value disqualifies it from the markup.
pub fn should_remove(name: &str, value: &PropValue, info: Option<&PropertyInfo>) -> bool {
    if value.is_null() {
        return true;
    }
    if let Some(info) = info {
        if info.class == ValueClass::Reserved {
            return false;
        }
    }
    match value {
        PropValue::Handler(_) | PropValue::Style(_) => return true,
        PropValue::Bool(_) => match info {
            Some(info) => {
                if !info.accepts_booleans() {
                    return true;
                }
            }
            None => {
                let custom_prefix = name.get(..5).is_some_and(|prefix| {
                    prefix.eq_ignore_ascii_case("data-") || prefix.eq_ignore_ascii_case("aria-")
                });
                return !custom_prefix;
            }
        },
        _ => {}
    }
    if let Some(info) = info {
        match info.class {
            ValueClass::Boolean => return !value.is_truthy(),
            ValueClass::OverloadedBoolean => return matches!(value, PropValue::Bool(false)),
            ValueClass::Numeric => return numeric_coerce(value).is_nan(),
            ValueClass::PositiveNumeric => {
                let number = numeric_coerce(value);
                return number.is_nan() || number < 1.0;
            }
            _ => {}
        }
    }
    false
}

/// Loose numeric coercion over prop values, used by the numeric classes.
fn numeric_coerce(value: &PropValue) -> f64 {
    match value {
        PropValue::Null => 0.0,
        PropValue::Bool(flag) => {
            if *flag {
                1.0
            } else {
                0.0
            }
        }
        PropValue::Number(number) => *number,
        PropValue::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse().unwrap_or(f64::NAN)
            }
        }
        PropValue::List(items) => match items.len() {
            0 => 0.0,
            1 => numeric_coerce(&items[0]),
            _ => f64::NAN,
        },
        PropValue::Style(_) | PropValue::Handler(_) => f64::NAN,
    }
}
