use crate::math::{rotation_y, translation, Mat44f, Vec3f};

/// One object handed to the renderer each frame
#[derive(Debug, Clone, PartialEq)]
pub struct Drawable {
    pub name: String,
    pub model: Mat44f,
}

impl Drawable {
    pub fn new(name: impl Into<String>, model: Mat44f) -> Self {
        Self {
            name: name.into(),
            model,
        }
    }
}

/// Flat list of drawables, no hierarchy
#[derive(Debug, Clone, Default)]
pub struct Scene {
    drawables: Vec<Drawable>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, drawable: Drawable) -> usize {
        self.drawables.push(drawable);
        self.drawables.len() - 1
    }

    pub fn drawables(&self) -> &[Drawable] {
        &self.drawables
    }

    pub fn model_matrices(&self) -> Vec<Mat44f> {
        self.drawables.iter().map(|d| d.model).collect()
    }

    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }
}

/// Two copies of the terrain mesh: one at the origin, one turned by `angle`
/// and shifted 3 units along its local X
pub fn create_default_scene(angle: f32) -> Scene {
    let mut scene = Scene::new();
    let _ = scene.push(Drawable::new("terrain", rotation_y(angle)));
    let _ = scene.push(Drawable::new(
        "terrain-offset",
        rotation_y(angle) * translation(Vec3f::new(3.0, 0.0, 0.0)),
    ));
    scene
}
