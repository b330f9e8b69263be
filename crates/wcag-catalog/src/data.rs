use wcag_core::Level::{A, Aa, Aaa};
use wcag_core::Principle::{Operable, Perceivable, Robust, Understandable};

use crate::Entry;

const TEXT_ALTERNATIVES: &str = "Text Alternatives";
const TIME_BASED_MEDIA: &str = "Time-based Media";
const ADAPTABLE: &str = "Adaptable";
const DISTINGUISHABLE: &str = "Distinguishable";
const KEYBOARD_ACCESSIBLE: &str = "Keyboard Accessible";
const ENOUGH_TIME: &str = "Enough Time";
const SEIZURES: &str = "Seizures and Physical Reactions";
const NAVIGABLE: &str = "Navigable";
const INPUT_MODALITIES: &str = "Input Modalities";
const READABLE: &str = "Readable";
const PREDICTABLE: &str = "Predictable";
const INPUT_ASSISTANCE: &str = "Input Assistance";
const COMPATIBLE: &str = "Compatible";

pub(crate) static ENTRIES: &[Entry] = &[
    // 1 Perceivable
    Entry::new("1.1.1", "Non-text Content", A, Perceivable, TEXT_ALTERNATIVES)
        .describe("All non-text content that is relevant to understanding the page has a text alternative, visible or not, that identifies it (including captchas).")
        .keywords(&["alt text", "images", "description", "SEO", "alternative"])
        .link(21, "non-text-content"),
    Entry::new("1.2.1", "Audio-only and Video-only (Prerecorded)", A, Perceivable, TIME_BASED_MEDIA)
        .describe("Prerecorded audio-only content has a text transcript; prerecorded video-only content has a transcript or an audio track.")
        .keywords(&["transcript", "audio", "video", "media"])
        .link(21, "audio-only-and-video-only-prerecorded"),
    Entry::new("1.2.2", "Captions (Prerecorded)", A, Perceivable, TIME_BASED_MEDIA)
        .describe("Captions are provided for all prerecorded audio content in synchronized media.")
        .keywords(&["captions", "deaf", "hearing impairment"])
        .link(21, "captions-prerecorded"),
    Entry::new("1.2.3", "Audio Description or Media Alternative (Prerecorded)", A, Perceivable, TIME_BASED_MEDIA)
        .describe("An audio description or a full text alternative is provided for prerecorded video content.")
        .keywords(&["audio description", "transcript", "video"])
        .link(21, "audio-description-or-media-alternative-prerecorded"),
    Entry::new("1.2.4", "Captions (Live)", Aa, Perceivable, TIME_BASED_MEDIA)
        .describe("Captions are provided for all live audio content in synchronized media.")
        .keywords(&["captions", "live", "real time"])
        .link(21, "captions-live"),
    Entry::new("1.2.5", "Audio Description (Prerecorded)", Aa, Perceivable, TIME_BASED_MEDIA)
        .describe("Audio description is provided for all prerecorded video content in synchronized media.")
        .keywords(&["audio description", "video", "visual impairment"])
        .link(21, "audio-description-prerecorded"),
    Entry::new("1.2.6", "Sign Language (Prerecorded)", Aaa, Perceivable, TIME_BASED_MEDIA)
        .describe("Sign language interpretation is provided for all prerecorded audio content in synchronized media.")
        .keywords(&["sign language", "deaf", "interpretation"])
        .link(21, "sign-language-prerecorded"),
    Entry::new("1.2.7", "Extended Audio Description (Prerecorded)", Aaa, Perceivable, TIME_BASED_MEDIA)
        .describe("Where pauses in foreground audio are too short for audio description, the video is paused to provide extended audio description.")
        .keywords(&["audio description", "extended", "video"])
        .link(21, "extended-audio-description-prerecorded"),
    Entry::new("1.2.8", "Media Alternative (Prerecorded)", Aaa, Perceivable, TIME_BASED_MEDIA)
        .describe("A full text alternative is provided for all prerecorded synchronized media and video-only media.")
        .keywords(&["transcript", "media", "text alternative"])
        .link(21, "media-alternative-prerecorded"),
    Entry::new("1.2.9", "Audio-only (Live)", Aaa, Perceivable, TIME_BASED_MEDIA)
        .describe("An alternative that presents equivalent information is provided for live audio-only content.")
        .keywords(&["live", "audio", "transcript"])
        .link(21, "audio-only-live"),
    Entry::new("1.3.1", "Info and Relationships", A, Perceivable, ADAPTABLE)
        .describe("Information, structure and relationships conveyed through presentation can be programmatically determined or are available in text.")
        .keywords(&["semantics", "structure", "headings", "tables", "forms"])
        .link(21, "info-and-relationships"),
    Entry::new("1.3.2", "Meaningful Sequence", A, Perceivable, ADAPTABLE)
        .describe("When the order of content affects its meaning, a correct reading sequence can be programmatically determined.")
        .keywords(&["reading order", "sequence", "screen reader"])
        .link(21, "meaningful-sequence"),
    Entry::new("1.3.3", "Sensory Characteristics", A, Perceivable, ADAPTABLE)
        .describe("Instructions do not rely solely on sensory characteristics such as shape, colour, size, visual location, orientation or sound.")
        .keywords(&["instructions", "shape", "position", "sound"])
        .link(21, "sensory-characteristics"),
    Entry::new("1.3.4", "Orientation", Aa, Perceivable, ADAPTABLE)
        .describe("Content does not restrict its view and operation to a single display orientation unless that orientation is essential.")
        .keywords(&["orientation", "portrait", "landscape", "mobile"])
        .link(21, "orientation"),
    Entry::new("1.3.5", "Identify Input Purpose", Aa, Perceivable, ADAPTABLE)
        .describe("The purpose of input fields that collect information about the user can be programmatically determined.")
        .keywords(&["autocomplete", "forms", "input"])
        .link(21, "identify-input-purpose"),
    Entry::new("1.3.6", "Identify Purpose", Aaa, Perceivable, ADAPTABLE)
        .describe("The purpose of user interface components, icons and regions can be programmatically determined.")
        .keywords(&["landmarks", "icons", "regions", "personalization"])
        .link(21, "identify-purpose"),
    Entry::new("1.4.1", "Use of Color", A, Perceivable, DISTINGUISHABLE)
        .describe("Colour is not the only visual means of conveying information, indicating an action, prompting a response or distinguishing an element.")
        .keywords(&["color", "colour blindness", "links"])
        .link(21, "use-of-color"),
    Entry::new("1.4.2", "Audio Control", A, Perceivable, DISTINGUISHABLE)
        .describe("Audio that plays automatically for more than 3 seconds can be paused, stopped or have its volume controlled independently.")
        .keywords(&["autoplay", "audio", "volume"])
        .link(21, "audio-control"),
    Entry::new("1.4.3", "Contrast (Minimum)", Aa, Perceivable, DISTINGUISHABLE)
        .describe("Text and images of text have a contrast ratio of at least 4.5:1, or 3:1 for large text.")
        .keywords(&["contrast", "color", "low vision", "text"])
        .link(21, "contrast-minimum"),
    Entry::new("1.4.4", "Resize Text", Aa, Perceivable, DISTINGUISHABLE)
        .describe("Text can be resized up to 200 percent without assistive technology and without loss of content or functionality.")
        .keywords(&["zoom", "font size", "low vision"])
        .link(21, "resize-text"),
    Entry::new("1.4.5", "Images of Text", Aa, Perceivable, DISTINGUISHABLE)
        .describe("Text is used to convey information rather than images of text, except where customizable or essential.")
        .keywords(&["images", "text", "typography"])
        .link(21, "images-of-text"),
    Entry::new("1.4.6", "Contrast (Enhanced)", Aaa, Perceivable, DISTINGUISHABLE)
        .describe("Text and images of text have a contrast ratio of at least 7:1, or 4.5:1 for large text.")
        .keywords(&["contrast", "color", "low vision"])
        .link(21, "contrast-enhanced"),
    Entry::new("1.4.7", "Low or No Background Audio", Aaa, Perceivable, DISTINGUISHABLE)
        .describe("Prerecorded speech has no background sound, the background can be turned off, or it is at least 20 dB lower than the speech.")
        .keywords(&["audio", "background", "speech"])
        .link(21, "low-or-no-background-audio"),
    Entry::new("1.4.8", "Visual Presentation", Aaa, Perceivable, DISTINGUISHABLE)
        .describe("Blocks of text offer user-selectable colours, limited line width, no justification, adequate line spacing and resizing without horizontal scrolling.")
        .keywords(&["readability", "line spacing", "text blocks"])
        .link(21, "visual-presentation"),
    Entry::new("1.4.9", "Images of Text (No Exception)", Aaa, Perceivable, DISTINGUISHABLE)
        .describe("Images of text are only used for pure decoration or where a particular presentation is essential.")
        .keywords(&["images", "text", "logos"])
        .link(21, "images-of-text-no-exception"),
    Entry::new("1.4.10", "Reflow", Aa, Perceivable, DISTINGUISHABLE)
        .describe("Content can be presented at a width of 320 CSS pixels without loss of information and without scrolling in two dimensions.")
        .keywords(&["responsive", "zoom", "mobile", "scrolling"])
        .link(21, "reflow"),
    Entry::new("1.4.11", "Non-text Contrast", Aa, Perceivable, DISTINGUISHABLE)
        .describe("User interface components and meaningful graphics have a contrast ratio of at least 3:1 against adjacent colours.")
        .keywords(&["contrast", "icons", "focus", "controls"])
        .link(21, "non-text-contrast"),
    Entry::new("1.4.12", "Text Spacing", Aa, Perceivable, DISTINGUISHABLE)
        .describe("No content or functionality is lost when users override line height, paragraph, letter and word spacing.")
        .keywords(&["spacing", "line height", "dyslexia"])
        .link(21, "text-spacing"),
    Entry::new("1.4.13", "Content on Hover or Focus", Aa, Perceivable, DISTINGUISHABLE)
        .describe("Additional content shown on hover or focus is dismissible, hoverable and persistent.")
        .keywords(&["tooltip", "hover", "focus", "popup"])
        .link(21, "content-on-hover-or-focus"),
    // 2 Operable
    Entry::new("2.1.1", "Keyboard", A, Operable, KEYBOARD_ACCESSIBLE)
        .describe("All functionality is operable through a keyboard interface without requiring specific timings for individual keystrokes.")
        .keywords(&["keyboard", "navigation", "interaction"])
        .link(21, "keyboard"),
    Entry::new("2.1.2", "No Keyboard Trap", A, Operable, KEYBOARD_ACCESSIBLE)
        .describe("Focus can always be moved away from a component using only the keyboard.")
        .keywords(&["focus", "trap", "modal"])
        .link(21, "no-keyboard-trap"),
    Entry::new("2.1.3", "Keyboard (No Exception)", Aaa, Operable, KEYBOARD_ACCESSIBLE)
        .describe("All functionality is operable through a keyboard interface, without exception.")
        .keywords(&["keyboard", "navigation"])
        .link(21, "keyboard-no-exception"),
    Entry::new("2.1.4", "Character Key Shortcuts", A, Operable, KEYBOARD_ACCESSIBLE)
        .describe("Single-character shortcuts can be turned off, remapped, or are only active when the component has focus.")
        .keywords(&["shortcuts", "speech input", "keys"])
        .link(21, "character-key-shortcuts"),
    Entry::new("2.2.1", "Timing Adjustable", A, Operable, ENOUGH_TIME)
        .describe("Users can turn off, adjust or extend each time limit set by the content.")
        .keywords(&["time limit", "session", "timeout"])
        .link(21, "timing-adjustable"),
    Entry::new("2.2.2", "Pause, Stop, Hide", A, Operable, ENOUGH_TIME)
        .describe("Moving, blinking, scrolling or auto-updating information can be paused, stopped or hidden.")
        .keywords(&["carousel", "animation", "auto-update"])
        .link(21, "pause-stop-hide"),
    Entry::new("2.2.3", "No Timing", Aaa, Operable, ENOUGH_TIME)
        .describe("Timing is not an essential part of the event or activity, except for real-time events and non-interactive media.")
        .keywords(&["time limit", "timing"])
        .link(21, "no-timing"),
    Entry::new("2.2.4", "Interruptions", Aaa, Operable, ENOUGH_TIME)
        .describe("Interruptions can be postponed or suppressed by the user, except those involving an emergency.")
        .keywords(&["notifications", "interruptions", "alerts"])
        .link(21, "interruptions"),
    Entry::new("2.2.5", "Re-authenticating", Aaa, Operable, ENOUGH_TIME)
        .describe("When an authenticated session expires, the user can continue the activity without loss of data after re-authenticating.")
        .keywords(&["session", "login", "data loss"])
        .link(21, "re-authenticating"),
    Entry::new("2.2.6", "Timeouts", Aaa, Operable, ENOUGH_TIME)
        .describe("Users are warned of the duration of any inactivity that could cause data loss, unless data is preserved for more than 20 hours.")
        .keywords(&["timeout", "inactivity", "warning"])
        .link(22, "timeouts"),
    Entry::new("2.3.1", "Three Flashes or Below Threshold", A, Operable, SEIZURES)
        .describe("Pages do not contain anything that flashes more than three times in any one second period, or the flash is below the thresholds.")
        .keywords(&["flashing", "epilepsy", "seizures"])
        .link(21, "three-flashes-or-below-threshold"),
    Entry::new("2.3.2", "Three Flashes", Aaa, Operable, SEIZURES)
        .describe("Pages do not contain anything that flashes more than three times in any one second period.")
        .keywords(&["flashing", "epilepsy"])
        .link(21, "three-flashes"),
    Entry::new("2.3.3", "Animation from Interactions", Aaa, Operable, SEIZURES)
        .describe("Motion animation triggered by interaction can be disabled unless the animation is essential.")
        .keywords(&["animation", "motion", "vestibular", "reduced motion"])
        .link(21, "animation-from-interactions"),
    Entry::new("2.4.1", "Bypass Blocks", A, Operable, NAVIGABLE)
        .describe("A mechanism is available to bypass blocks of content that are repeated on multiple pages.")
        .keywords(&["skip link", "navigation", "landmarks"])
        .link(21, "bypass-blocks"),
    Entry::new("2.4.2", "Page Titled", A, Operable, NAVIGABLE)
        .describe("Web pages have titles that describe topic or purpose.")
        .keywords(&["title", "page", "SEO"])
        .link(21, "page-titled"),
    Entry::new("2.4.3", "Focus Order", A, Operable, NAVIGABLE)
        .describe("Focusable components receive focus in an order that preserves meaning and operability.")
        .keywords(&["focus", "tab order", "keyboard"])
        .link(21, "focus-order"),
    Entry::new("2.4.4", "Link Purpose (In Context)", A, Operable, NAVIGABLE)
        .describe("The purpose of each link can be determined from the link text alone or together with its programmatically determined context.")
        .keywords(&["links", "link text", "context"])
        .link(21, "link-purpose-in-context"),
    Entry::new("2.4.5", "Multiple Ways", Aa, Operable, NAVIGABLE)
        .describe("More than one way is available to locate a page within a set of pages.")
        .keywords(&["search", "sitemap", "navigation"])
        .link(21, "multiple-ways"),
    Entry::new("2.4.6", "Headings and Labels", Aa, Operable, NAVIGABLE)
        .describe("Headings and labels describe topic or purpose.")
        .keywords(&["headings", "labels", "forms"])
        .link(21, "headings-and-labels"),
    Entry::new("2.4.7", "Focus Visible", Aa, Operable, NAVIGABLE)
        .describe("Any keyboard operable user interface has a mode of operation where the keyboard focus indicator is visible.")
        .keywords(&["focus", "outline", "keyboard"])
        .link(21, "focus-visible"),
    Entry::new("2.4.8", "Location", Aaa, Operable, NAVIGABLE)
        .describe("Information about the user's location within a set of pages is available.")
        .keywords(&["breadcrumbs", "navigation", "location"])
        .link(21, "location"),
    Entry::new("2.4.9", "Link Purpose (Link Only)", Aaa, Operable, NAVIGABLE)
        .describe("The purpose of each link can be identified from the link text alone.")
        .keywords(&["links", "link text"])
        .link(21, "link-purpose-link-only"),
    Entry::new("2.4.10", "Section Headings", Aaa, Operable, NAVIGABLE)
        .describe("Section headings are used to organize the content.")
        .keywords(&["headings", "structure"])
        .link(21, "section-headings"),
    Entry::new("2.4.11", "Focus Not Obscured (Minimum)", Aa, Operable, NAVIGABLE)
        .describe("When a component receives keyboard focus, it is not entirely hidden by author-created content.")
        .keywords(&["focus", "sticky header", "overlay"])
        .link(22, "focus-not-obscured-minimum"),
    Entry::new("2.4.12", "Focus Not Obscured (Enhanced)", Aaa, Operable, NAVIGABLE)
        .describe("When a component receives keyboard focus, no part of it is hidden by author-created content.")
        .keywords(&["focus", "overlay"])
        .link(22, "focus-not-obscured-enhanced"),
    Entry::new("2.4.13", "Focus Appearance", Aaa, Operable, NAVIGABLE)
        .describe("The focus indicator is at least as large as a 2 CSS pixel perimeter and has a contrast ratio of at least 3:1 between focused and unfocused states.")
        .keywords(&["focus", "contrast", "outline"])
        .link(22, "focus-appearance"),
    Entry::new("2.5.1", "Pointer Gestures", A, Operable, INPUT_MODALITIES)
        .describe("Functionality that uses multipoint or path-based gestures can be operated with a single pointer without a path-based gesture.")
        .keywords(&["gestures", "touch", "mobile"])
        .link(21, "pointer-gestures"),
    Entry::new("2.5.2", "Pointer Cancellation", A, Operable, INPUT_MODALITIES)
        .describe("Functions operated with a single pointer can be aborted or undone, and are not completed on the down-event.")
        .keywords(&["click", "touch", "accidental activation"])
        .link(21, "pointer-cancellation"),
    Entry::new("2.5.3", "Label in Name", A, Operable, INPUT_MODALITIES)
        .describe("For components with visible text labels, the accessible name contains the visible text.")
        .keywords(&["labels", "accessible name", "speech input"])
        .link(21, "label-in-name"),
    Entry::new("2.5.4", "Motion Actuation", A, Operable, INPUT_MODALITIES)
        .describe("Functionality operated by device or user motion can also be operated through interface components, and motion response can be disabled.")
        .keywords(&["motion", "shake", "sensors"])
        .link(21, "motion-actuation"),
    Entry::new("2.5.5", "Target Size (Enhanced)", Aaa, Operable, INPUT_MODALITIES)
        .describe("Pointer targets are at least 44 by 44 CSS pixels.")
        .keywords(&["target size", "touch", "buttons"])
        .link(21, "target-size-enhanced"),
    Entry::new("2.5.6", "Concurrent Input Mechanisms", Aaa, Operable, INPUT_MODALITIES)
        .describe("Content does not restrict use of the input modalities available on a platform.")
        .keywords(&["input", "keyboard", "touch", "mouse"])
        .link(21, "concurrent-input-mechanisms"),
    Entry::new("2.5.7", "Dragging Movements", Aa, Operable, INPUT_MODALITIES)
        .describe("Functionality that uses dragging can be achieved by a single pointer without dragging.")
        .keywords(&["drag and drop", "pointer", "motor"])
        .link(22, "dragging-movements"),
    Entry::new("2.5.8", "Target Size (Minimum)", Aa, Operable, INPUT_MODALITIES)
        .describe("Pointer targets are at least 24 by 24 CSS pixels, except where spacing or other exceptions apply.")
        .keywords(&["target size", "touch", "buttons"])
        .link(22, "target-size-minimum"),
    // 3 Understandable
    Entry::new("3.1.1", "Language of Page", A, Understandable, READABLE)
        .describe("The default human language of each page can be programmatically determined.")
        .keywords(&["lang", "language", "screen reader"])
        .link(21, "language-of-page"),
    Entry::new("3.1.2", "Language of Parts", Aa, Understandable, READABLE)
        .describe("The human language of each passage or phrase can be programmatically determined.")
        .keywords(&["lang", "language", "pronunciation"])
        .link(21, "language-of-parts"),
    Entry::new("3.1.3", "Unusual Words", Aaa, Understandable, READABLE)
        .describe("A mechanism is available for identifying definitions of words used in an unusual or restricted way, including idioms and jargon.")
        .keywords(&["glossary", "jargon", "idioms"])
        .link(21, "unusual-words"),
    Entry::new("3.1.4", "Abbreviations", Aaa, Understandable, READABLE)
        .describe("A mechanism for identifying the expanded form or meaning of abbreviations is available.")
        .keywords(&["abbreviations", "acronyms"])
        .link(21, "abbreviations"),
    Entry::new("3.1.5", "Reading Level", Aaa, Understandable, READABLE)
        .describe("When text requires reading ability beyond lower secondary education level, supplemental content or a simpler version is available.")
        .keywords(&["plain language", "readability", "cognitive"])
        .link(21, "reading-level"),
    Entry::new("3.1.6", "Pronunciation", Aaa, Understandable, READABLE)
        .describe("A mechanism is available for identifying the pronunciation of words where meaning is ambiguous without it.")
        .keywords(&["pronunciation", "phonetics"])
        .link(21, "pronunciation"),
    Entry::new("3.2.1", "On Focus", A, Understandable, PREDICTABLE)
        .describe("Receiving focus does not initiate a change of context.")
        .keywords(&["focus", "context change", "predictable"])
        .link(21, "on-focus"),
    Entry::new("3.2.2", "On Input", A, Understandable, PREDICTABLE)
        .describe("Changing the setting of a component does not automatically cause a change of context unless the user has been advised beforehand.")
        .keywords(&["forms", "context change", "select"])
        .link(21, "on-input"),
    Entry::new("3.2.3", "Consistent Navigation", Aa, Understandable, PREDICTABLE)
        .describe("Navigation repeated on multiple pages occurs in the same relative order each time.")
        .keywords(&["navigation", "menu", "consistency"])
        .link(21, "consistent-navigation"),
    Entry::new("3.2.4", "Consistent Identification", Aa, Understandable, PREDICTABLE)
        .describe("Components with the same functionality are identified consistently across a set of pages.")
        .keywords(&["icons", "labels", "consistency"])
        .link(21, "consistent-identification"),
    Entry::new("3.2.5", "Change on Request", Aaa, Understandable, PREDICTABLE)
        .describe("Changes of context are initiated only by user request, or a mechanism is available to turn them off.")
        .keywords(&["context change", "new window", "redirect"])
        .link(21, "change-on-request"),
    Entry::new("3.2.6", "Consistent Help", A, Understandable, PREDICTABLE)
        .describe("Help mechanisms repeated on multiple pages occur in the same relative order.")
        .keywords(&["help", "contact", "consistency"])
        .link(22, "consistent-help"),
    Entry::new("3.3.1", "Error Identification", A, Understandable, INPUT_ASSISTANCE)
        .describe("When an input error is detected, the item in error is identified and the error is described to the user in text.")
        .keywords(&["errors", "forms", "validation"])
        .link(21, "error-identification"),
    Entry::new("3.3.2", "Labels or Instructions", A, Understandable, INPUT_ASSISTANCE)
        .describe("Labels or instructions are provided when content requires user input.")
        .keywords(&["labels", "forms", "instructions"])
        .link(21, "labels-or-instructions"),
    Entry::new("3.3.3", "Error Suggestion", Aa, Understandable, INPUT_ASSISTANCE)
        .describe("When an input error is detected and suggestions for correction are known, they are provided to the user.")
        .keywords(&["errors", "suggestions", "forms"])
        .link(21, "error-suggestion"),
    Entry::new("3.3.4", "Error Prevention (Legal, Financial, Data)", Aa, Understandable, INPUT_ASSISTANCE)
        .describe("Submissions with legal or financial consequences are reversible, checked or confirmed.")
        .keywords(&["confirmation", "transactions", "forms"])
        .link(21, "error-prevention-legal-financial-data"),
    Entry::new("3.3.5", "Help", Aaa, Understandable, INPUT_ASSISTANCE)
        .describe("Context-sensitive help is available.")
        .keywords(&["help", "instructions"])
        .link(21, "help"),
    Entry::new("3.3.6", "Error Prevention (All)", Aaa, Understandable, INPUT_ASSISTANCE)
        .describe("Every submission that requires the user to submit information is reversible, checked or confirmed.")
        .keywords(&["confirmation", "forms", "review"])
        .link(21, "error-prevention-all"),
    Entry::new("3.3.7", "Redundant Entry", A, Understandable, INPUT_ASSISTANCE)
        .describe("Information previously entered by the user in the same process is auto-populated or available for selection.")
        .keywords(&["forms", "autofill", "cognitive"])
        .link(22, "redundant-entry"),
    Entry::new("3.3.8", "Accessible Authentication (Minimum)", Aa, Understandable, INPUT_ASSISTANCE)
        .describe("No step in an authentication process requires a cognitive function test unless an alternative or assistance is provided.")
        .keywords(&["login", "password", "captcha", "cognitive"])
        .link(22, "accessible-authentication-minimum"),
    Entry::new("3.3.9", "Accessible Authentication (Enhanced)", Aaa, Understandable, INPUT_ASSISTANCE)
        .describe("No step in an authentication process requires a cognitive function test, including object or content recognition, unless an alternative is provided.")
        .keywords(&["login", "captcha", "cognitive"])
        .link(22, "accessible-authentication-enhanced"),
    // 4 Robust
    Entry::new("4.1.1", "Parsing", A, Robust, COMPATIBLE)
        .describe("Removed in WCAG 2.2. It once ensured that markup was parsed reliably by assistive technologies, but modern browsers and specifications made it redundant.")
        .keywords(&["semantics", "markup", "removed"])
        .link(21, "parsing")
        .removed(),
    Entry::new("4.1.2", "Name, Role, Value", A, Robust, COMPATIBLE)
        .describe("For all user interface components, name and role can be programmatically determined and states, properties and values can be set and are notified to assistive technologies.")
        .keywords(&["ARIA", "accessible name", "components", "screen reader"])
        .link(21, "name-role-value"),
    Entry::new("4.1.3", "Status Messages", Aa, Robust, COMPATIBLE)
        .describe("Status messages can be programmatically determined through role or properties so they are presented without receiving focus.")
        .keywords(&["ARIA live", "notifications", "screen reader"])
        .link(21, "status-messages"),
];
