//! Tabelle der annotierten Objekte eines Bildes.
//!
//! Eltern-Verweise sind IDs, keine Besitz-Zeiger: ein Kind-Objekt schlägt
//! seinen Eltern-Umriss bei Bedarf in der Tabelle nach.

use anyhow::{bail, Context};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{BoundingBox, Contour, Curve, Point};

/// Stabile ID eines annotierten Objekts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(pub u64);

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ein annotiertes Objekt (Zelle, Teilregion, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationObject {
    pub id: ObjectId,
    /// Laufende Nummer des Wurzel-Objekts ("Object N")
    pub number: u32,
    /// Kind-Suffix ("Object N.M"), `None` bei Wurzel-Objekten
    pub suffix: Option<u32>,
    /// Klassen-Label (0-basiert)
    pub class_label: u32,
    /// Wurzel-Objekt, aus dessen Umriss dieses Objekt geschnitten wird
    pub parent: Option<ObjectId>,
    /// Aktueller Umriss
    pub contour: Option<Contour>,
    /// Zoom-Ausschnitt für die Anzeige
    pub zoom: Option<BoundingBox>,
    /// Schwerpunkt aus der Vorsegmentierung
    pub centroid: Option<Point>,
}

impl AnnotationObject {
    /// Anzeigename, z.B. "Object 3" oder "Object 3.2".
    pub fn name(&self) -> String {
        match self.suffix {
            Some(suffix) => format!("Object {}.{}", self.number, suffix),
            None => format!("Object {}", self.number),
        }
    }

    pub fn has_contour(&self) -> bool {
        self.contour.is_some()
    }
}

/// Alle Objekte eines Bildes in Anzeige-Reihenfolge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectTable {
    objects: IndexMap<ObjectId, AnnotationObject>,
    next_id: u64,
}

impl ObjectTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, id: ObjectId) -> Option<&AnnotationObject> {
        self.objects.get(&id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut AnnotationObject> {
        self.objects.get_mut(&id)
    }

    /// Iteriert in Anzeige-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &AnnotationObject> {
        self.objects.values()
    }

    /// Alle Kinder eines Wurzel-Objekts in Anzeige-Reihenfolge.
    pub fn children_of(&self, root: ObjectId) -> impl Iterator<Item = &AnnotationObject> {
        self.objects
            .values()
            .filter(move |obj| obj.parent == Some(root))
    }

    /// Umriss des Eltern-Objekts (falls Eltern-Objekt und Umriss existieren).
    pub fn parent_contour(&self, id: ObjectId) -> Option<&Contour> {
        let parent = self.get(id)?.parent?;
        self.get(parent)?.contour.as_ref()
    }

    fn allocate_id(&mut self) -> ObjectId {
        self.next_id += 1;
        ObjectId(self.next_id)
    }

    fn next_root_number(&self) -> u32 {
        self.objects
            .values()
            .filter(|obj| obj.suffix.is_none())
            .map(|obj| obj.number)
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Legt ein neues Wurzel-Objekt ohne Umriss am Ende an.
    pub fn add_object(&mut self) -> ObjectId {
        let id = self.allocate_id();
        let number = self.next_root_number();
        self.objects.insert(
            id,
            AnnotationObject {
                id,
                number,
                suffix: None,
                class_label: 0,
                parent: None,
                contour: None,
                zoom: None,
                centroid: None,
            },
        );
        log::debug!("Objekt {} angelegt (Object {})", id, number);
        id
    }

    /// Legt ein Kind-Objekt an, das aus dem Umriss des Wurzel-Objekts von `of` geschnitten wird.
    ///
    /// Kinder von Kindern hängen ebenfalls direkt am Wurzel-Objekt.
    /// Das neue Objekt wird hinter dem letzten Familienmitglied einsortiert
    /// und übernimmt dessen Zoom-Ausschnitt.
    pub fn add_child(&mut self, of: ObjectId) -> anyhow::Result<ObjectId> {
        let source = self
            .get(of)
            .with_context(|| format!("Objekt {} existiert nicht", of))?;
        let root = source.parent.unwrap_or(of);
        let zoom = source.zoom;
        let root_obj = self
            .get(root)
            .with_context(|| format!("Wurzel-Objekt {} existiert nicht", root))?;
        let number = root_obj.number;
        let class_label = root_obj.class_label;

        let suffix = self
            .children_of(root)
            .filter_map(|child| child.suffix)
            .max()
            .unwrap_or(0)
            + 1;

        let insert_at = self
            .objects
            .values()
            .rposition(|obj| obj.id == root || obj.parent == Some(root))
            .map_or(self.objects.len(), |idx| idx + 1);

        let id = self.allocate_id();
        self.objects.shift_insert(
            insert_at,
            id,
            AnnotationObject {
                id,
                number,
                suffix: Some(suffix),
                class_label,
                parent: Some(root),
                contour: None,
                zoom,
                centroid: None,
            },
        );
        log::debug!("Kind-Objekt {} angelegt (Object {}.{})", id, number, suffix);
        Ok(id)
    }

    /// Übernimmt einen Umriss aus der Vorsegmentierung als neues Wurzel-Objekt.
    pub fn seed_object(
        &mut self,
        ring: Curve,
        centroid: Option<Point>,
        zoom: Option<BoundingBox>,
    ) -> anyhow::Result<ObjectId> {
        let id = self.add_object();
        let Some(contour) = Contour::from_ring(ring, id, 0, None) else {
            self.objects.shift_remove(&id);
            bail!("Vorsegmentierter Umriss ist kein einfacher geschlossener Ring");
        };
        if let Some(obj) = self.objects.get_mut(&id) {
            obj.centroid = centroid.or(contour.centroid);
            obj.zoom = zoom;
            obj.contour = Some(contour);
        }
        Ok(id)
    }

    /// Entfernt ein Objekt. Kinder eines entfernten Wurzel-Objekts verlieren ihren Eltern-Verweis.
    pub fn remove_object(&mut self, id: ObjectId) -> Option<AnnotationObject> {
        let removed = self.objects.shift_remove(&id)?;
        if removed.parent.is_none() {
            for obj in self.objects.values_mut() {
                if obj.parent == Some(id) {
                    obj.parent = None;
                    if let Some(contour) = obj.contour.as_mut() {
                        contour.parent = None;
                    }
                }
            }
        }
        log::debug!("Objekt {} entfernt ({})", id, removed.name());
        Some(removed)
    }

    /// Entfernt alle Objekte und setzt die Nummerierung zurück.
    pub fn remove_all_objects(&mut self) {
        self.objects.clear();
        self.next_id = 0;
    }

    /// Setzt das Klassen-Label (geklemmt auf `0..class_count`).
    pub fn set_class(&mut self, id: ObjectId, class_label: u32, class_count: u32) -> bool {
        let Some(obj) = self.objects.get_mut(&id) else {
            return false;
        };
        let clamped = class_label.min(class_count.saturating_sub(1));
        obj.class_label = clamped;
        if let Some(contour) = obj.contour.as_mut() {
            contour.class_label = clamped;
        }
        true
    }

    /// Klasse um eins erhöhen (am oberen Ende keine Änderung).
    pub fn class_up(&mut self, id: ObjectId, class_count: u32) -> bool {
        let Some(current) = self.get(id).map(|obj| obj.class_label) else {
            return false;
        };
        self.set_class(id, current.saturating_add(1), class_count)
    }

    /// Klasse um eins verringern (bei 0 keine Änderung).
    pub fn class_down(&mut self, id: ObjectId, class_count: u32) -> bool {
        let Some(current) = self.get(id).map(|obj| obj.class_label) else {
            return false;
        };
        self.set_class(id, current.saturating_sub(1), class_count)
    }

    /// Klemmt alle Labels nach einer Verkleinerung der Klassenanzahl.
    pub fn clamp_classes(&mut self, class_count: u32) {
        let ids: Vec<ObjectId> = self.objects.keys().copied().collect();
        for id in ids {
            if let Some(current) = self.get(id).map(|obj| obj.class_label) {
                self.set_class(id, current, class_count);
            }
        }
    }
}
