use shared_types::*;
use std::fs;
use std::path::PathBuf;
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate TypeScript definitions for API types
    let mut types = Vec::new();

    // Import types
    types.push(clean_type(ImportContext::export_to_string()?));
    types.push(clean_type(ValidationError::export_to_string()?));
    types.push(clean_type(ImportResult::export_to_string()?));

    // Group types
    types.push(clean_type(ContactChannel::export_to_string()?));
    types.push(clean_type(MemberKind::export_to_string()?));
    types.push(clean_type(Group::export_to_string()?));
    types.push(clean_type(Member::export_to_string()?));
    types.push(clean_type(NewGroup::export_to_string()?));
    types.push(clean_type(NewMember::export_to_string()?));
    types.push(clean_type(CreatedGroup::export_to_string()?));

    // Tenant types
    types.push(clean_type(Tenant::export_to_string()?));
    types.push(clean_type(TenantDefaults::export_to_string()?));
    types.push(clean_type(CreateTenantRequest::export_to_string()?));

    let output_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("bindings"));
    fs::create_dir_all(&output_dir)?;

    let output_path = output_dir.join("types.ts");
    let output = types.join("\n\n");

    fs::write(&output_path, output)?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}

/// Drops the generated-file banner ts-rs puts on every export
fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    let result = type_def
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("// This file was generated")
                && !trimmed.starts_with("/* This file was generated")
        })
        .collect::<Vec<_>>()
        .join("\n");

    let result = result.trim();
    if result.is_empty() {
        String::new()
    } else {
        format!("{}\n", result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_type_drops_banner() {
        let raw = "// This file was generated by ts-rs. Do not edit this file manually.\r\nimport type { MemberKind } from \"./MemberKind\";\r\n\r\nexport type NewMember = { name: string, kind: MemberKind, admin_entered: boolean, };\r\n";

        assert_eq!(
            clean_type(raw.to_string()),
            "import type { MemberKind } from \"./MemberKind\";\n\nexport type NewMember = { name: string, kind: MemberKind, admin_entered: boolean, };\n"
        );
        assert_eq!(clean_type("/* This file was generated */".to_string()), "");
    }
}
