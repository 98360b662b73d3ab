// All prompt constants for the Quotes module.
// The system instruction is fixed at startup and shared by every request;
// the user prompt interpolates the four request fields.

/// Persona and per-category formatting rules sent as the Gemini system
/// instruction on every call.
pub const SYSTEM_INSTRUCTION: &str = "You are a customized quote-generating AI. \
    The user will provide inputs such as Category (Quran, Bible, Bhagavad Gita, Thirukkural, Random), \
    Profession (Teacher, Doctor, Student), Interest (sports, arts, memes), and Preference (motivational, honesty, self-esteem), \
    and you will provide quotes relevant to these inputs.\n\n\
    If the user selects Thirukkural, include both Tamil and English versions, with the Tamil Kural in this format:\n\
    EXAMPLE FORMAT: அகர முதல எழுத்தெல்லாம் ஆதி\n\
    பகவன் முதற்றே உலகு.\n\n\
    If the user selects Quran, provide relevant ayah in both English and Arabic.\n\
    If the user selects Random, provide quotes from anywhere relevant to their input.\n\
    For meme-related interests, ensure the quotes have a humorous tone.\
    Note: Provide only the quotes.";

/// Builds the per-request user prompt. Pure string interpolation — the four
/// fields are free-form and intentionally unvalidated here.
pub fn build_quote_prompt(
    category: &str,
    preference: &str,
    profession: &str,
    interest: &str,
) -> String {
    format!(
        "Generate a quote from the {category} related to the profession of a {profession}, \
        interested in {interest}, with a preference for {preference}. \
        For Quran quotes, return the response in the following format:\n\
        *English:* [English translation of Ayah]\n\
        *Arabic:* [Arabic text of Ayah]"
    )
}
