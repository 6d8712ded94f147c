use std::collections::HashMap;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use eframe::egui::{self, Color32, RichText};
use gallery_adapters::present_status;
use gallery_application::{
    AddImageCommand, ApplicationError, DeleteSelectedCommand, GalleryService,
    SelectFolderCommand, SelectImageCommand, ThumbnailSource,
};
use gallery_domain::{GridCell, GridLayout, ImageFile};
use log::{debug, warn};

use crate::config::AppConfig;

const BACKGROUND: Color32 = Color32::from_rgb(0xDD, 0xEF, 0xE3);
const BUTTON_FILL: Color32 = Color32::from_rgb(0x87, 0xCE, 0xEB);
const CELL_BORDER: Color32 = Color32::from_rgb(0xCC, 0xCC, 0xCC);
const SELECTED_BORDER: Color32 = Color32::RED;
const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

#[derive(Debug, Clone)]
enum UiAction {
    AddImage,
    SelectFolder,
    DeleteSelected,
    Select(ImageFile),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct TextureKey {
    path: PathBuf,
    modified: SystemTime,
    edge: u32,
}

enum CachedThumbnail {
    Ready(egui::TextureHandle),
    Failed,
}

/// Decoded thumbnails keyed by file version, so a re-added file is decoded
/// again while unchanged files are decoded once.
struct ThumbnailCache {
    source: Box<dyn ThumbnailSource>,
    entries: HashMap<TextureKey, CachedThumbnail>,
}

impl ThumbnailCache {
    fn new(source: Box<dyn ThumbnailSource>) -> Self {
        Self {
            source,
            entries: HashMap::new(),
        }
    }

    fn get(
        &mut self,
        ctx: &egui::Context,
        file: &ImageFile,
        edge: u32,
    ) -> Option<egui::TextureHandle> {
        let key = TextureKey {
            path: file.path.clone(),
            modified: file.modified,
            edge,
        };
        let entry = self
            .entries
            .entry(key)
            .or_insert_with(|| match self.source.load_thumbnail(&file.path, edge) {
                Ok(thumb) => {
                    let image = egui::ColorImage::from_rgba_unmultiplied(
                        [thumb.width as usize, thumb.height as usize],
                        &thumb.rgba,
                    );
                    CachedThumbnail::Ready(ctx.load_texture(
                        file.path.display().to_string(),
                        image,
                        egui::TextureOptions::LINEAR,
                    ))
                }
                Err(error) => {
                    warn!("no thumbnail for {}: {error}", file.path.display());
                    CachedThumbnail::Failed
                }
            });

        match entry {
            CachedThumbnail::Ready(texture) => Some(texture.clone()),
            CachedThumbnail::Failed => None,
        }
    }

    fn retain_listed(&mut self, files: &[ImageFile]) {
        self.entries.retain(|key, _| {
            files
                .iter()
                .any(|file| file.path == key.path && file.modified == key.modified)
        });
    }
}

struct GalleryApp {
    service: GalleryService,
    thumbnails: ThumbnailCache,
    gallery_layout: GridLayout,
    recent_layout: GridLayout,
    poll_interval: Duration,
    last_error: Option<String>,
}

impl GalleryApp {
    fn new(
        cc: &eframe::CreationContext<'_>,
        service: GalleryService,
        thumbnails: Box<dyn ThumbnailSource>,
        config: &AppConfig,
    ) -> Self {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.visuals.panel_fill = BACKGROUND;
        style.visuals.window_fill = BACKGROUND;
        cc.egui_ctx.set_style(style);

        Self {
            service,
            thumbnails: ThumbnailCache::new(thumbnails),
            gallery_layout: config.gallery_layout,
            recent_layout: config.recent_layout,
            poll_interval: config.watch_poll_interval,
            last_error: None,
        }
    }

    fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::SelectFolder => {
                let Some(folder) = rfd::FileDialog::new()
                    .set_title("Select an image folder")
                    .pick_folder()
                else {
                    return;
                };
                self.service.select_folder(SelectFolderCommand { folder });
                self.last_error = None;
            }
            UiAction::AddImage => {
                if self.service.folder().is_none() {
                    self.report(ApplicationError::NoFolderSelected);
                    return;
                }
                let Some(source) = rfd::FileDialog::new()
                    .set_title("Add an image")
                    .add_filter("Images", &IMAGE_EXTENSIONS)
                    .pick_file()
                else {
                    return;
                };
                match self.service.add_image(AddImageCommand { source }) {
                    Ok(_) => self.last_error = None,
                    Err(error) => self.report(error),
                }
            }
            UiAction::DeleteSelected => match self.service.delete_selected(DeleteSelectedCommand) {
                Ok(_) => self.last_error = None,
                Err(error) => self.report(error),
            },
            UiAction::Select(image) => {
                let selected = self
                    .service
                    .select_image(SelectImageCommand { image })
                    .map(|file| file.display_name.clone());
                debug!("selection is now {selected:?}");
            }
        }
        self.thumbnails.retain_listed(self.service.gallery_view());
    }

    fn report(&mut self, error: ApplicationError) {
        warn!("{error}");
        self.last_error = Some(error.to_string());
    }
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.service.poll_external_changes() {
            self.thumbnails.retain_listed(self.service.gallery_view());
        }
        ctx.request_repaint_after(self.poll_interval);

        let mut action: Option<UiAction> = None;

        egui::TopBottomPanel::bottom("actions").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if action_button(ui, "Add Image").clicked() {
                    action = Some(UiAction::AddImage);
                }
                if action_button(ui, "Select Folder").clicked() {
                    action = Some(UiAction::SelectFolder);
                }
                if action_button(ui, "Delete Image").clicked() {
                    action = Some(UiAction::DeleteSelected);
                }
            });
            ui.label(present_status(
                self.service.folder(),
                self.service.gallery_view().len(),
                self.service.selected(),
            ));
            if let Some(error) = &self.last_error {
                ui.colored_label(ui.visuals().error_fg_color, error);
            }
            ui.add_space(6.0);
        });

        egui::SidePanel::right("recent")
            .resizable(true)
            .default_width(ctx.screen_rect().width() / 3.0)
            .show(ctx, |ui| {
                let cells = self.recent_layout.cells(self.service.recent_view());
                if let Some(clicked) = render_panel(
                    ui,
                    "Recent Images",
                    20.0,
                    &cells,
                    &self.recent_layout,
                    self.service.selected(),
                    &mut self.thumbnails,
                ) {
                    action = Some(UiAction::Select(clicked));
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let cells = self.gallery_layout.cells(self.service.gallery_view());
            if let Some(clicked) = render_panel(
                ui,
                "Photo Gallery",
                28.0,
                &cells,
                &self.gallery_layout,
                self.service.selected(),
                &mut self.thumbnails,
            ) {
                action = Some(UiAction::Select(clicked));
            }
        });

        if let Some(action) = action {
            self.apply(action);
        }
    }
}

fn action_button(ui: &mut egui::Ui, label: &str) -> egui::Response {
    ui.add(
        egui::Button::new(RichText::new(label).strong().size(14.0).color(Color32::BLACK))
            .fill(BUTTON_FILL)
            .min_size(egui::vec2(140.0, 32.0)),
    )
}

fn render_panel(
    ui: &mut egui::Ui,
    title: &str,
    title_size: f32,
    cells: &[GridCell<'_>],
    layout: &GridLayout,
    selected: Option<&ImageFile>,
    thumbnails: &mut ThumbnailCache,
) -> Option<ImageFile> {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(title).strong().size(title_size));
    });
    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt(title)
        .auto_shrink([false, false])
        .show(ui, |ui| render_grid(ui, title, cells, layout, selected, thumbnails))
        .inner
}

/// Draws `cells` as a thumbnail grid and reports the item clicked this frame.
fn render_grid(
    ui: &mut egui::Ui,
    id: &str,
    cells: &[GridCell<'_>],
    layout: &GridLayout,
    selected: Option<&ImageFile>,
    thumbnails: &mut ThumbnailCache,
) -> Option<ImageFile> {
    let mut clicked = None;
    let edge = layout.cell_size().round() as u32;

    egui::Grid::new(id)
        .num_columns(layout.columns())
        .spacing([12.0, 12.0])
        .show(ui, |ui| {
            for cell in cells {
                if cell.column == 0 && cell.row > 0 {
                    ui.end_row();
                }
                let is_selected = selected
                    .map(|current| current.is_same_file(cell.item))
                    .unwrap_or(false);
                let response =
                    thumbnail_cell(ui, cell.item, layout.cell_size(), edge, is_selected, thumbnails);
                if response.clicked() {
                    clicked = Some(cell.item.clone());
                }
            }
        });

    clicked
}

fn thumbnail_cell(
    ui: &mut egui::Ui,
    file: &ImageFile,
    cell_size: f32,
    edge: u32,
    is_selected: bool,
    thumbnails: &mut ThumbnailCache,
) -> egui::Response {
    let stroke = if is_selected {
        egui::Stroke::new(2.0, SELECTED_BORDER)
    } else {
        egui::Stroke::new(0.5, CELL_BORDER)
    };

    egui::Frame::default()
        .stroke(stroke)
        .inner_margin(6.0)
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                let texture = thumbnails.get(ui.ctx(), file, edge);
                let image_response = match texture {
                    Some(texture) => ui.add(
                        egui::Image::new(&texture)
                            .max_size(egui::vec2(cell_size, cell_size))
                            .sense(egui::Sense::click()),
                    ),
                    None => placeholder(ui, cell_size),
                };
                let name_response = ui.add(
                    egui::Label::new(RichText::new(&file.display_name).strong().size(14.0))
                        .sense(egui::Sense::click()),
                );
                image_response.union(name_response)
            })
            .inner
        })
        .inner
}

fn placeholder(ui: &mut egui::Ui, cell_size: f32) -> egui::Response {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(cell_size, cell_size * 0.75), egui::Sense::click());
    ui.painter().rect_filled(rect, 4.0, Color32::from_gray(210));
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "?",
        egui::FontId::proportional(32.0),
        Color32::DARK_GRAY,
    );
    response
}

pub fn launch_window(
    service: GalleryService,
    thumbnails: Box<dyn ThumbnailSource>,
    config: &AppConfig,
) -> Result<(), String> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Gallery")
            .with_inner_size(config.window_size),
        ..Default::default()
    };

    let config = config.clone();
    eframe::run_native(
        "Gallery",
        options,
        Box::new(move |cc| Ok(Box::new(GalleryApp::new(cc, service, thumbnails, &config)))),
    )
    .map_err(|error| format!("failed to start UI: {error}"))
}
