use glam::Vec3;

/// Which faces a draw call renders. Integer codes match the values the host
/// passes down to the pipeline: 1 front, 2 back, 3 both; anything else
/// selects nothing and every fragment is discarded.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FaceSelection {
    Front,
    Back,
    #[default]
    Both,
    None,
}

impl FaceSelection {
    pub fn from_code(code: i32) -> FaceSelection {
        match code {
            1 => FaceSelection::Front,
            2 => FaceSelection::Back,
            3 => FaceSelection::Both,
            _ => FaceSelection::None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            FaceSelection::Front => 1,
            FaceSelection::Back => 2,
            FaceSelection::Both => 3,
            FaceSelection::None => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FaceSelection::Front => "front",
            FaceSelection::Back => "back",
            FaceSelection::Both => "both",
            FaceSelection::None => "none",
        }
    }

    pub fn parse(s: &str) -> Option<FaceSelection> {
        Some(match s.trim().to_ascii_lowercase().as_str() {
            "front" => FaceSelection::Front,
            "back" => FaceSelection::Back,
            "both" => FaceSelection::Both,
            "none" => FaceSelection::None,
            _ => return None,
        })
    }
}

/// The visibility decision for a fragment that survives face selection: the
/// normal lighting should use, and how much directed light reaches the
/// surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Facing {
    pub normal: Vec3,
    pub attenuation: f32,
}

/// Decide whether a fragment is drawn at all, and with which effective
/// normal. A fragment is front-facing when its normal points generally
/// toward the viewer (`dot(normal, view) >= 0`). A back face that survives
/// selection is lit with the flipped normal, attenuated by `1 - alpha` to
/// model light lost passing through the body; a fully opaque back face
/// therefore receives no directed light at all.
///
/// `None` is a deliberate discard, not an error: the fragment contributes
/// no color and its evaluation stops here.
pub fn classify(normal: Vec3, view: Vec3, alpha: f32, selection: FaceSelection) -> Option<Facing> {
    let front = normal.dot(view) >= 0.0;

    let visible = match selection {
        FaceSelection::Front => front,
        FaceSelection::Back => !front,
        FaceSelection::Both => true,
        FaceSelection::None => false,
    };
    if !visible {
        return None;
    }

    Some(if front {
        Facing {
            normal,
            attenuation: 1.0,
        }
    } else {
        Facing {
            normal: -normal,
            attenuation: 1.0 - alpha,
        }
    })
}
