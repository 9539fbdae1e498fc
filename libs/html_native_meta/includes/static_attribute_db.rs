
// Compiled-in attribute database, read by meta.rs. Can be replaced
// at runtime via the HTML_NATIVE_DB_JSON env var (see
// `read_attribute_db`).

const STATIC_ATTRIBUTE_DB: StaticAttributeDb = StaticAttributeDb {
    // Attributes that are only valid on the listed elements.
    limited: StaticMap(&[
        ("accept", StaticSet(&["form", "input"])),
        ("accept-charset", StaticSet(&["form"])),
        ("action", StaticSet(&["form"])),
        ("align", StaticSet(&["caption", "col", "colgroup", "hr", "iframe", "img", "table",
                              "tbody", "td", "tfoot", "th", "thead", "tr"])),
        ("allow", StaticSet(&["iframe"])),
        ("alt", StaticSet(&["area", "img", "input"])),
        ("async", StaticSet(&["script"])),
        ("autocomplete", StaticSet(&["form", "input", "select", "textarea"])),
        ("autofocus", StaticSet(&["button", "input", "select", "textarea"])),
        ("autoplay", StaticSet(&["audio", "video"])),
        ("buffered", StaticSet(&["audio", "video"])),
        ("capture", StaticSet(&["input"])),
        ("charset", StaticSet(&["meta", "script"])),
        ("checked", StaticSet(&["input"])),
        ("cite", StaticSet(&["blockquote", "del", "ins", "q"])),
        ("cols", StaticSet(&["textarea"])),
        ("colspan", StaticSet(&["td", "th"])),
        ("content", StaticSet(&["meta"])),
        ("controls", StaticSet(&["audio", "video"])),
        ("coords", StaticSet(&["area"])),
        ("crossorigin", StaticSet(&["audio", "img", "link", "script", "video"])),
        ("csp", StaticSet(&["iframe"])),
        ("data", StaticSet(&["object"])),
        ("datetime", StaticSet(&["del", "ins", "time"])),
        ("decoding", StaticSet(&["img"])),
        ("default", StaticSet(&["track"])),
        ("defer", StaticSet(&["script"])),
        ("dirname", StaticSet(&["input", "textarea"])),
        ("disabled", StaticSet(&["button", "fieldset", "input", "optgroup",
                                 "option", "select", "textarea"])),
        ("download", StaticSet(&["a", "area"])),
        ("enctype", StaticSet(&["form"])),
        ("enterkeyhint", StaticSet(&["textarea"])),
        ("for", StaticSet(&["label", "output"])),
        ("form", StaticSet(&["button", "fieldset", "input", "label", "meter", "object",
                             "output", "progress", "select", "textarea"])),
        ("formaction", StaticSet(&["input", "button"])),
        ("formenctype", StaticSet(&["button", "input"])),
        ("formmethod", StaticSet(&["button", "input"])),
        ("formnovalidate", StaticSet(&["button", "input"])),
        ("formtarget", StaticSet(&["button", "input"])),
        ("headers", StaticSet(&["td", "th"])),
        ("height", StaticSet(&["canvas", "embed", "iframe", "img", "input", "object", "video"])),
        ("high", StaticSet(&["meter"])),
        ("href", StaticSet(&["a", "area", "base", "link"])),
        ("hreflang", StaticSet(&["a", "area", "link"])),
        ("http-equiv", StaticSet(&["meta"])),
        ("importance", StaticSet(&["iframe", "img", "link", "script"])),
        ("integrity", StaticSet(&["link", "script"])),
        ("inputmode", StaticSet(&["textarea"])),
        ("ismap", StaticSet(&["img"])),
        ("kind", StaticSet(&["track"])),
        ("label", StaticSet(&["optgroup", "option", "track"])),
        ("language", StaticSet(&["script"])),
        ("loading", StaticSet(&["img", "iframe"])),
        ("list", StaticSet(&["input"])),
        ("loop", StaticSet(&["audio", "video"])),
        ("low", StaticSet(&["meter"])),
        ("max", StaticSet(&["input", "meter", "progress"])),
        ("maxlength", StaticSet(&["input", "textarea"])),
        ("minlength", StaticSet(&["input", "textarea"])),
        ("media", StaticSet(&["a", "area", "link", "source", "style"])),
        ("method", StaticSet(&["form"])),
        ("min", StaticSet(&["input", "select"])),
        ("multiple", StaticSet(&["input", "select"])),
        ("muted", StaticSet(&["audio", "video"])),
        ("name", StaticSet(&["button", "form", "fieldset", "iframe", "input", "object",
                             "output", "select", "textarea", "map", "meta", "param"])),
        ("novalidate", StaticSet(&["form"])),
        ("open", StaticSet(&["details"])),
        ("optimum", StaticSet(&["meter"])),
        ("pattern", StaticSet(&["input"])),
        ("ping", StaticSet(&["a", "area"])),
        ("placeholder", StaticSet(&["input", "textarea"])),
        ("poster", StaticSet(&["video"])),
        ("preload", StaticSet(&["audio", "video"])),
        ("readonly", StaticSet(&["input", "textarea"])),
        ("referrerpolicy", StaticSet(&["a", "area", "iframe", "img", "link", "script"])),
        ("rel", StaticSet(&["a", "area", "link"])),
        ("required", StaticSet(&["input", "select", "textarea"])),
        ("reversed", StaticSet(&["ol"])),
        ("rows", StaticSet(&["textarea"])),
        ("rowspan", StaticSet(&["td", "th"])),
        ("sandbox", StaticSet(&["iframe"])),
        ("scope", StaticSet(&["th"])),
        ("scoped", StaticSet(&["style"])),
        ("selected", StaticSet(&["option"])),
        ("shape", StaticSet(&["a", "area"])),
        ("size", StaticSet(&["input", "select"])),
        ("sizes", StaticSet(&["link", "img", "source"])),
        ("span", StaticSet(&["col", "colgroup"])),
        ("src", StaticSet(&["audio", "embed", "iframe", "img", "input", "script", "source",
                            "track", "video"])),
        ("srcdoc", StaticSet(&["iframe"])),
        ("srclang", StaticSet(&["track"])),
        ("srcset", StaticSet(&["img", "source"])),
        ("start", StaticSet(&["ol"])),
        ("step", StaticSet(&["input"])),
        ("summary", StaticSet(&["table"])),
        ("target", StaticSet(&["a", "area", "base", "form"])),
        ("type", StaticSet(&["button", "input", "embed", "object", "script", "source",
                             "style", "menu"])),
        ("usemap", StaticSet(&["img", "input", "object"])),
        ("value", StaticSet(&["button", "data", "input", "li", "meter", "option", "progress",
                              "param"])),
        ("width", StaticSet(&["canvas", "embed", "iframe", "img", "input", "object", "video"])),
        ("wrap", StaticSet(&["textarea"])),
    ]),
    // Deprecated or unsafe, never emitted.
    forbidden: StaticSet(&["background", "bgcolor", "border", "color", "manifest"]),
};
