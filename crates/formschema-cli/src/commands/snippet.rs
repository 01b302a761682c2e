//! Snippet command implementation.

use anyhow::Result;
use clap::Args;

/// Bundled example schemas and schema fragments, by display name.
pub const SNIPPETS: &[(&str, &str)] = &[
    (
        "basic-schema",
        r#"import { z } from "zod"

const formSchema = z.object({
  username: z.string().min(2).max(50),
  email: z.string().email(),
  password: z.string().min(8),
})"#,
    ),
    (
        "contact-form",
        r#"import { z } from "zod"

const contactFormSchema = z.object({
  name: z.string().min(2, "Name must be at least 2 characters"),
  email: z.string().email("Please enter a valid email address"),
  message: z.string().min(10, "Message must be at least 10 characters"),
  subscribe: z.boolean().default(false),
})"#,
    ),
    (
        "user-registration",
        r#"import { z } from "zod"

const userRegistrationSchema = z.object({
  username: z.string().min(3, "Username must be at least 3 characters"),
  email: z.string().email("Please enter a valid email address"),
  password: z.string()
    .min(8, "Password must be at least 8 characters")
    .regex(/[A-Z]/, "Password must contain at least one uppercase letter")
    .regex(/[0-9]/, "Password must contain at least one number"),
  confirmPassword: z.string(),
  dateOfBirth: z.date(),
  country: z.enum(["USA", "Canada", "UK", "Australia", "Other"]),
  agreeToTerms: z.boolean().default(true),
})"#,
    ),
    (
        "file-upload-form",
        r#"import { z } from "zod"

const fileUploadSchema = z.object({
  title: z.string().min(2, "Title must be at least 2 characters"),
  description: z.string().optional(),
  category: z.enum(["document", "image", "video", "audio", "other"]),
  file: z.instanceof(File),
  isPublic: z.boolean().default(false),
})"#,
    ),
    (
        "string-field",
        r#"  fieldName: z.string().min(2, "Must be at least 2 characters"),"#,
    ),
    (
        "email-field",
        r#"  email: z.string().email("Invalid email address"),"#,
    ),
    (
        "password-field",
        r#"  password: z.string().min(8, "Password must be at least 8 characters"),"#,
    ),
    ("number-field", r#"  age: z.number().min(18, "Must be at least 18"),"#),
    ("boolean-field", r#"  isActive: z.boolean().default(false),"#),
    ("date-field", r#"  birthDate: z.date(),"#),
    ("enum-field", r#"  role: z.enum(["admin", "user", "editor"]),"#),
    ("optional-field", r#"  bio: z.string().optional(),"#),
    ("file-field", r#"  profilePicture: z.instanceof(File).optional(),"#),
    (
        "multiple-files",
        r#"  attachments: z.array(z.instanceof(File)).optional(),"#,
    ),
];

/// List or print the bundled example schemas
#[derive(Args)]
pub struct SnippetCommand {
    /// Snippet name; lists available snippets when omitted
    pub name: Option<String>,
}

impl SnippetCommand {
    /// Execute the snippet command
    pub fn execute(&self) -> Result<()> {
        match &self.name {
            Some(name) => {
                let snippet = SNIPPETS
                    .iter()
                    .find(|(n, _)| n == name)
                    .map(|(_, code)| *code)
                    .ok_or_else(|| {
                        anyhow::anyhow!(
                            "Unknown snippet: {}. Run 'formschema snippet' to list them",
                            name
                        )
                    })?;
                println!("{}", snippet);
            }
            None => {
                for (name, _) in SNIPPETS {
                    println!("{}", name);
                }
            }
        }
        Ok(())
    }
}
