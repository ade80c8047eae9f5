/// The fixed, ordered set of contact form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Email,
    Phone,
    Message,
}

impl FieldId {
    /// Form order. Validation and focus traversal both follow this order.
    pub const ALL: [FieldId; 4] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Message,
    ];

    /// Label used in error messages and rendered next to the input.
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Name => "Name",
            FieldId::Email => "Email",
            FieldId::Phone => "Phone Number",
            FieldId::Message => "Message",
        }
    }

    /// Stable identifier used as the serialized key.
    pub fn key(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Message => "message",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            FieldId::Name => "Your full name",
            FieldId::Email => "you@example.com",
            FieldId::Phone => "415-555-1234",
            FieldId::Message => "How can we help? (10-1000 characters)",
        }
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
