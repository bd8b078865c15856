//! Built-in FurniCraft dictionaries.

/// English strings. Selector labels are always taken from this table.
pub(super) const EN: &[(&str, &str)] = &[
    ("welcome", "Welcome"),
    ("login", "Login"),
    ("username", "Username"),
    ("password", "Password"),
    ("enter_username", "Enter username"),
    ("enter_password", "Enter password"),
    ("invalid_login", "Invalid username or password."),
    ("login_success", "Login successful! Redirecting..."),
    ("select_language", "Select Language"),
    ("english", "English"),
    ("spanish", "Español"),
    ("french", "Français"),
    ("german", "Deutsch"),
    ("italian", "Italiano"),
    ("filipino", "Filipino"),
    ("customize", "Customize"),
    ("logout", "Logout"),
    ("back", "Back"),
    ("additional_notes", "Additional Design Notes:"),
    ("save_as_png", "Save as PNG"),
    ("send_to_shop", "Send to Furniture Shop"),
    ("choose_your_furniture", "Choose Your Furniture"),
    (
        "select_furniture_desc",
        "Select the perfect furniture piece to start your crafting journey. Each item can be customized with premium materials and finishes.",
    ),
    (
        "language_for_view_only_alert",
        "Note: Language selection is for viewing purposes only; the site is in English.",
    ),
];

/// Filipino strings.
pub(super) const FIL: &[(&str, &str)] = &[
    ("welcome", "Maligayang pagdating"),
    ("login", "Mag-log In"),
    ("username", "Username"),
    ("password", "Password"),
    ("enter_username", "Ilagay ang username"),
    ("enter_password", "Ilagay ang password"),
    ("invalid_login", "Hindi wastong username o password."),
    ("login_success", "Matagumpay na pag-log in! Papunta..."),
    ("select_language", "Piliin ang Wika"),
    ("english", "Ingles"),
    ("spanish", "Español"),
    ("french", "Pranses"),
    ("german", "Aleman"),
    ("italian", "Italyano"),
    ("filipino", "Filipino"),
    ("customize", "Ipasadya"),
    ("logout", "Mag-log Out"),
    ("back", "Bumalik"),
    ("additional_notes", "Karagdagang Tala sa Disenyo:"),
    ("save_as_png", "I-save bilang PNG"),
    ("send_to_shop", "Ipadala sa Puwesto ng Muwebles"),
    ("choose_your_furniture", "Pumili ng Iyong Muwebles"),
    (
        "select_furniture_desc",
        "Pumili ng perpektong muwebles para simulan ang iyong paglikha. Ang bawat item ay maaaring ipasadya gamit ang premium na materyales at tapusin.",
    ),
    (
        "language_for_view_only_alert",
        "Tandaan: Ang pagpili ng wika ay para lamang sa panonood; ang site ay nasa Ingles.",
    ),
];
