//! Prompt assembly.
//!
//! The system instruction tells the model which sections to write and how to
//! mark them up; the section headings it asks for are exactly the glyph-led
//! `**title**` lines the report parser recognizes.

use medibrief_core::models::patient::PatientRecord;
use medibrief_core::models::template::{EMPOWERMENT_GLYPH, ReportTemplate, WARNING_GLYPH};

const NOT_PROVIDED: &str = "Not provided";
const NONE_REPORTED: &str = "None reported";

/// Appended verbatim at the end of every report.
pub const DISCLAIMER: &str = "This is AI-generated medical guidance and not a substitute for professional medical advice. The information provided is for informational purposes only. Do not rely solely on this information for diagnosis or treatment. Please consult a licensed healthcare provider for an accurate diagnosis and personalized treatment plan.";

const ROLE: &str = "\
You are a highly professional, intelligent, and reliable AI-powered Medical Assistant. \
Your role is to act as a digital doctor's assistant.
Your primary function is to take patient data and generate a structured, empathetic, and clear medical report.";

const RESPONSIBILITIES: &str = "\
1. Analyze the provided patient data which includes: Patient Details, Medical History, Current Symptoms, \
Current Medications, Allergies, Lifestyle factors, and any uploaded medical documents (e.g., lab reports, images of symptoms).
2. Carefully analyze any uploaded medical documents. Extract key information, values, and observations. \
Cross-reference this visual data with the patient's reported symptoms to form a more complete picture.";

const KNOWLEDGE_BASE: &[(&str, &str)] = &[
    ("Fever", "Paracetamol, Hydration, Rest."),
    ("Cough & Cold", "Cough syrup, Steam inhalation, Vitamin C."),
    ("Headache", "Ibuprofen, Cold compress."),
    ("Diabetes", "Metformin, Lifestyle control."),
    ("Hypertension", "Amlodipine, Low-salt diet."),
    ("Gastric Issues", "Antacids, Omeprazole."),
    ("Skin Rashes/Allergy", "Antihistamines."),
    ("Asthma", "Inhaler (Salbutamol)."),
    ("Diarrhea", "ORS, Zinc tablets."),
    ("Joint Pain", "Pain relievers (NSAIDs), Physiotherapy."),
    ("Anemia", "Iron supplements."),
    ("COVID-like Symptoms", "Paracetamol, Isolate, Consult a doctor."),
];

/// Build the system instruction for `template`.
pub fn system_instruction(template: ReportTemplate) -> String {
    let sections = template.sections();
    let mut out = String::new();

    out.push_str(&format!("{ROLE}\n\n"));
    out.push_str(&format!("CORE RESPONSIBILITIES:\n{RESPONSIBILITIES}\n"));
    out.push_str(
        "3. Generate a structured medical report with the following sections. \
         Start each section with its heading line exactly as shown (emoji followed by the **bold** title). \
         Use - for bullet points and **bold** for emphasis.\n\n",
    );
    for section in sections {
        out.push_str(&format!(
            "   - {} **{}**: {}\n",
            section.glyph, section.title, section.guidance
        ));
    }

    out.push_str("\n4. KNOWLEDGE BASE (For your reference, do not just copy-paste):\n");
    for (condition, advice) in KNOWLEDGE_BASE {
        out.push_str(&format!("   - {condition}: {advice}\n"));
    }

    let glyphs: Vec<&str> = std::iter::once("\u{2705}")
        .chain(std::iter::once(WARNING_GLYPH))
        .chain(sections.iter().map(|s| s.glyph))
        .collect();
    out.push_str(&format!(
        "\n5. STYLE & ATTITUDE:\n   \
         - Use a professional, confident, and empathetic tone.\n   \
         - Use emojis for clarity: {}.\n   \
         - Use patient-friendly language. Avoid overly technical jargon.\n   \
         - Conclude with an empathetic note on its own line that contains {EMPOWERMENT_GLYPH}, like: \
         \"Your health is your priority. This guidance is a starting point, but professional medical advice is crucial. Stay strong {EMPOWERMENT_GLYPH}.\"\n",
        glyphs.join(", ")
    ));

    out.push_str(&format!(
        "\n6. MANDATORY SAFETY NOTE (Add this verbatim at the very end):\n---\n{WARNING_GLYPH} **Disclaimer**: {DISCLAIMER}\n"
    ));

    out
}

/// Render a patient record as the user prompt.
pub fn format_patient_record(record: &PatientRecord) -> String {
    let lifestyle = &record.lifestyle;
    let symptoms: Vec<&str> = record.symptoms.iter().collect();

    format!(
        "
Here is the complete patient data profile for your analysis:

- **Patient Vitals**:
  - Name: {name}
  - Age: {age}
  - Gender: {gender}
  - Height: {height}
  - Weight: {weight}

- **Medical Context**:
  - Medical History: {history}
  - Family Medical History: {family}
  - Current Medications: {medications}
  - Allergies: {allergies}

- **Symptom Details**:
  - Description: {symptoms}
  - Start Date: {start}
  - Intensity (1-10): {intensity}

- **Lifestyle Factors**:
  - Dietary Habits: {diet}
  - Exercise Frequency: {exercise}
  - Sleep Patterns: {sleep}
  - Stress Level: {stress}
  - Alcohol and Tobacco Use: {substances}

{attachments}Please generate the structured medical report based on this comprehensive data, following your core directives precisely.
",
        name = or_not_provided(&record.name),
        age = display_or(record.age, NOT_PROVIDED),
        gender = record.gender.label().unwrap_or(NOT_PROVIDED),
        height = record
            .height_cm
            .map(|h| format!("{h} cm"))
            .unwrap_or_else(|| NOT_PROVIDED.to_string()),
        weight = record
            .weight_kg
            .map(|w| format!("{w} kg"))
            .unwrap_or_else(|| NOT_PROVIDED.to_string()),
        history = or_none_reported(&record.medical_history),
        family = or_none_reported(&record.family_medical_history),
        medications = or_none_reported(&record.current_medications),
        allergies = or_none_reported(&record.allergies),
        symptoms = if symptoms.is_empty() {
            NOT_PROVIDED.to_string()
        } else {
            symptoms.join(", ")
        },
        start = display_or(record.symptom_start_date, NOT_PROVIDED),
        intensity = display_or(record.symptom_intensity, NOT_PROVIDED),
        diet = or_not_provided(&lifestyle.dietary_habits),
        exercise = or_not_provided(&lifestyle.exercise_frequency),
        sleep = or_not_provided(&lifestyle.sleep_patterns),
        stress = lifestyle.stress_level.label().unwrap_or(NOT_PROVIDED),
        substances = or_not_provided(&lifestyle.alcohol_and_tobacco_use),
        attachments = attachment_note(record),
    )
}

fn attachment_note(record: &PatientRecord) -> String {
    if record.files.is_empty() {
        return String::new();
    }
    let names: Vec<&str> = record.files.iter().map(|f| f.name.as_str()).collect();
    format!(
        "- **Uploaded Documents**: {} image(s) attached ({})\n\n",
        names.len(),
        names.join(", ")
    )
}

fn or_not_provided(value: &str) -> &str {
    non_blank(value).unwrap_or(NOT_PROVIDED)
}

fn or_none_reported(value: &str) -> &str {
    non_blank(value).unwrap_or(NONE_REPORTED)
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn display_or<T: ToString>(value: Option<T>, fallback: &str) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| fallback.to_string())
}
