//! Import-set derivation for generated components.

use formschema_core::{Field, FieldType};

use crate::RADIO_OPTION_LIMIT;

/// Which shadcn/ui component families a form needs.
///
/// Derived in one pass over the field list; imports for unused families are
/// omitted entirely so the generated file only pulls in what it renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSet {
    /// `<Input>` (text, email, password, number, file and array fallback)
    pub input: bool,
    /// `<Textarea>`
    pub textarea: bool,
    /// `<Checkbox>`
    pub checkbox: bool,
    /// `<RadioGroup>` (enum with few options)
    pub radio_group: bool,
    /// `<Select>` (enum with many options)
    pub select: bool,
    /// `<Calendar>` with popover and date formatting
    pub calendar: bool,
}

impl ImportSet {
    /// Scan a field list and record the component families it uses.
    pub fn scan(fields: &[Field]) -> Self {
        let mut set = Self::default();
        for field in fields {
            match field.field_type {
                FieldType::Text
                | FieldType::Email
                | FieldType::Password
                | FieldType::Number
                | FieldType::File
                | FieldType::Array => set.input = true,
                FieldType::Textarea => set.textarea = true,
                FieldType::Boolean => set.checkbox = true,
                FieldType::Date => set.calendar = true,
                FieldType::Enum => {
                    if field.options.len() <= RADIO_OPTION_LIMIT {
                        set.radio_group = true;
                    } else {
                        set.select = true;
                    }
                }
            }
        }
        set
    }

    /// Import block for the validated form component.
    pub fn component_header(&self) -> String {
        let mut out = String::from("\"use client\"\n\n");
        out.push_str("import { zodResolver } from \"@hookform/resolvers/zod\"\n");
        out.push_str("import { useForm } from \"react-hook-form\"\n");
        out.push_str("import { z } from \"zod\"\n\n");
        out.push_str("import { Button } from \"@/components/ui/button\"\n");
        out.push_str("import { Form, FormControl, FormDescription, FormField, FormItem, FormLabel, FormMessage } from \"@/components/ui/form\"\n");
        self.push_field_imports(&mut out);
        out
    }

    /// Import block for the static preview component.
    pub fn preview_header(&self) -> String {
        let mut out = String::from("\"use client\"\n\n");
        out.push_str("import { Button } from \"@/components/ui/button\"\n");
        out.push_str("import { Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle } from \"@/components/ui/card\"\n");
        out.push_str("import { Label } from \"@/components/ui/label\"\n");
        self.push_field_imports(&mut out);
        out
    }

    /// Field-driven imports, in a fixed order so output stays byte-stable.
    fn push_field_imports(&self, out: &mut String) {
        if self.input {
            out.push_str("import { Input } from \"@/components/ui/input\"\n");
        }
        if self.textarea {
            out.push_str("import { Textarea } from \"@/components/ui/textarea\"\n");
        }
        if self.checkbox {
            out.push_str("import { Checkbox } from \"@/components/ui/checkbox\"\n");
        }
        if self.radio_group {
            out.push_str(
                "import { RadioGroup, RadioGroupItem } from \"@/components/ui/radio-group\"\n",
            );
        }
        if self.select {
            out.push_str("import { Select, SelectContent, SelectItem, SelectTrigger, SelectValue } from \"@/components/ui/select\"\n");
        }
        if self.calendar {
            out.push_str("import { CalendarIcon } from 'lucide-react'\n");
            out.push_str("import { Calendar } from \"@/components/ui/calendar\"\n");
            out.push_str(
                "import { Popover, PopoverContent, PopoverTrigger } from \"@/components/ui/popover\"\n",
            );
            out.push_str("import { cn } from \"@/lib/utils\"\n");
            out.push_str("import { format } from \"date-fns\"\n");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formschema_core::Field;

    fn field(name: &str, field_type: FieldType) -> Field {
        Field::new(name, field_type).unwrap()
    }

    #[test]
    fn test_scan_text_types_share_input() {
        let fields = vec![field("a", FieldType::Email), field("b", FieldType::File)];
        let set = ImportSet::scan(&fields);
        assert!(set.input);
        assert!(!set.textarea);
        assert!(!set.calendar);
    }

    #[test]
    fn test_enum_threshold_picks_family() {
        let three = field("c", FieldType::Enum)
            .with_options(vec!["a".into(), "b".into(), "c".into()]);
        let set = ImportSet::scan(&[three]);
        assert!(set.radio_group);
        assert!(!set.select);

        let four = field("c", FieldType::Enum).with_options(vec![
            "a".into(),
            "b".into(),
            "c".into(),
            "d".into(),
        ]);
        let set = ImportSet::scan(&[four]);
        assert!(set.select);
        assert!(!set.radio_group);
    }

    #[test]
    fn test_unused_families_omitted() {
        let set = ImportSet::scan(&[field("on", FieldType::Boolean)]);
        let header = set.component_header();
        assert!(header.contains("ui/checkbox"));
        assert!(!header.contains("ui/input"));
        assert!(!header.contains("ui/select"));
        assert!(!header.contains("date-fns"));
    }

    #[test]
    fn test_date_pulls_calendar_stack() {
        let set = ImportSet::scan(&[field("when", FieldType::Date)]);
        let header = set.preview_header();
        assert!(header.contains("CalendarIcon"));
        assert!(header.contains("ui/popover"));
        assert!(header.contains("date-fns"));
    }
}
