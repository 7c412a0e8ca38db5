//! End-to-end tests for the style registry (register -> alias -> mutate -> resolve)

use pretty_assertions::assert_eq;
use quill_sheets::prelude::*;

/// Test that a fresh workbook carries the seeded registry
#[test]
fn test_new_workbook_registry_is_seeded() {
    let wb = Workbook::new();
    let styles = wb.styles();

    assert_eq!(styles.fonts().len(), 1, "default font should be seeded");
    assert_eq!(styles.fills().len(), 1, "default fill should be seeded");
    assert_eq!(styles.borders().len(), 1, "default border should be seeded");
    assert_eq!(styles.cell_style_formats().len(), 1);
    assert_eq!(styles.cell_formats().len(), 1);

    // "Normal" points at the seeded style format
    let (_, normal) = styles.cell_style_by_name("Normal").unwrap();
    assert_eq!(normal.format_index, StyleIndex::default());

    // An untouched sheet cascades everything to cell format 0
    let resolver = wb.resolver(0).unwrap();
    assert_eq!(resolver.resolve("A1").unwrap(), StyleIndex::default());
}

/// Test that cells sharing a format index see record mutations together
#[test]
fn test_shared_format_mutation_reaches_all_holders() {
    let mut wb = Workbook::new();
    wb.add_worksheet_with_name("Summary").unwrap();

    let accent = wb.styles_mut().cell_formats_mut().create();

    // Two cells on two different sheets hold the same index
    wb.worksheet_mut(0)
        .unwrap()
        .set_cell_format("A1", accent)
        .unwrap();
    wb.worksheet_mut(1)
        .unwrap()
        .set_cell_format("B2", accent)
        .unwrap();

    // Point the shared record at a bold font
    let bold = wb.styles_mut().fonts_mut().create();
    wb.styles_mut().fonts_mut().get_mut(bold).unwrap().bold = true;
    let record = wb.styles_mut().cell_formats_mut().get_mut(accent).unwrap();
    record.font_index = bold;
    record.apply_font = true;

    // Both cells resolve to the updated record
    for index in 0..2 {
        let resolver = wb.resolver(index).unwrap();
        let address = if index == 0 { "A1" } else { "B2" };
        let format = resolver.format(address).unwrap();
        assert!(format.apply_font, "sheet {} should see the bold font", index);
        assert_eq!(format.font_index, bold);
    }
}

/// Test that a copied format is detached from its template
#[test]
fn test_copied_format_diverges_from_template() {
    let mut wb = Workbook::new();

    let red_fill = wb.styles_mut().fills_mut().create();
    wb.styles_mut()
        .fills_mut()
        .set(red_fill, Fill::solid(Color::RED))
        .unwrap();

    let template = wb.styles_mut().cell_formats_mut().create();
    {
        let record = wb.styles_mut().cell_formats_mut().get_mut(template).unwrap();
        record.fill_index = red_fill;
        record.apply_fill = true;
    }

    let copy = wb.styles_mut().cell_formats_mut().create_from(template).unwrap();
    assert_ne!(copy, template, "copy gets its own slot");

    // The copy starts as a snapshot of the template
    let styles = wb.styles();
    assert_eq!(
        styles.cell_formats().get(copy).unwrap(),
        styles.cell_formats().get(template).unwrap()
    );

    // Retargeting the copy leaves the template alone
    let blue_fill = wb.styles_mut().fills_mut().create();
    wb.styles_mut()
        .fills_mut()
        .set(blue_fill, Fill::solid(Color::BLUE))
        .unwrap();
    wb.styles_mut()
        .cell_formats_mut()
        .get_mut(copy)
        .unwrap()
        .fill_index = blue_fill;

    let styles = wb.styles();
    assert_eq!(styles.cell_formats().get(template).unwrap().fill_index, red_fill);
    assert_eq!(styles.cell_formats().get(copy).unwrap().fill_index, blue_fill);
}

/// Test registering and looking up a named style
#[test]
fn test_named_style_registration_and_application() {
    let mut wb = Workbook::new();

    // Build a "Heading 1" style around a bold 16pt font
    let font = wb.styles_mut().fonts_mut().create();
    wb.styles_mut()
        .fonts_mut()
        .set(font, Font::new().with_bold(true).with_size(16.0))
        .unwrap();
    let format = wb.styles_mut().cell_style_formats_mut().create();
    {
        let record = wb
            .styles_mut()
            .cell_style_formats_mut()
            .get_mut(format)
            .unwrap();
        record.font_index = font;
        record.apply_font = true;
    }
    let heading = wb.styles_mut().cell_styles_mut().create();
    wb.styles_mut()
        .cell_styles_mut()
        .set(heading, CellStyle::new("Heading 1", format))
        .unwrap();

    // Lookup by name finds the entry
    let (found, style) = wb.styles().cell_style_by_name("Heading 1").unwrap();
    assert_eq!(found, heading);
    assert_eq!(style.format_index, format);
    assert!(wb.styles().cell_style_by_name("Heading 9").is_none());

    // The style's format record is reachable through the registry
    let record = wb.styles().cell_style_formats().get(format).unwrap();
    let resolved_font = wb.styles().fonts().get(record.font_index).unwrap();
    assert!(resolved_font.bold);
    assert_eq!(resolved_font.size, 16.0);
}

/// Test fill mode exclusivity surfacing through the registry
#[test]
fn test_fill_mode_guards_through_registry() {
    let mut wb = Workbook::new();

    let fill = wb.styles_mut().fills_mut().create();

    // Solid attributes are rejected while the fill has no mode
    let err = wb
        .styles_mut()
        .fills_mut()
        .get_mut(fill)
        .unwrap()
        .set_solid_color(Color::YELLOW)
        .unwrap_err();
    assert!(matches!(err, Error::IncompatibleFillType { .. }));

    // Switching to gradient enables gradient attributes only
    let record = wb.styles_mut().fills_mut().get_mut(fill).unwrap();
    record.set_fill_type(FillType::Gradient);
    record.set_gradient_type(GradientType::Path).unwrap();
    let stop = record.stops_mut().unwrap().create();
    record
        .stops_mut()
        .unwrap()
        .set(stop, GradientStop::new(0.5, Color::GREEN))
        .unwrap();
    assert!(record.set_solid_color(Color::YELLOW).is_err());

    // Leaving gradient mode discards the stops
    record.set_fill_type(FillType::Solid);
    record.set_fill_type(FillType::Gradient);
    assert_eq!(record.stops().unwrap().len(), 0);
}

/// Test that registry indices survive a save and reopen
#[test]
fn test_registry_survives_save_and_reopen() {
    let mut store = MemoryStore::new();

    let mut doc = Document::create(&mut store, "styled.sheet", OverwritePolicy::Never).unwrap();
    let wb = doc.workbook_mut();

    let font = wb.styles_mut().fonts_mut().create();
    wb.styles_mut()
        .fonts_mut()
        .set(font, Font::new().with_name("Arial").with_italic(true))
        .unwrap();
    let format = wb.styles_mut().cell_formats_mut().create();
    {
        let record = wb.styles_mut().cell_formats_mut().get_mut(format).unwrap();
        record.font_index = font;
        record.apply_font = true;
    }
    wb.worksheet_mut(0)
        .unwrap()
        .set_cell_format("C3", format)
        .unwrap();

    doc.save().unwrap();
    doc.close();

    let doc = Document::open(&mut store, "styled.sheet").unwrap();
    let resolver = doc.workbook().resolver(0).unwrap();
    assert_eq!(resolver.resolve("C3").unwrap(), format);

    let reopened_font = doc
        .workbook()
        .styles()
        .fonts()
        .get(resolver.format("C3").unwrap().font_index)
        .unwrap();
    assert_eq!(reopened_font.name, "Arial");
    assert!(reopened_font.italic);
}
