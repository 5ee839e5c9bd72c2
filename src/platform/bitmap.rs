//! Wrapper over the host's bitmap type.

use crate::bind::ClassBinding;
use crate::host::{Arg, HostEnv};
use crate::{Error, Pixmap, Result};

const CLASS: &str = "android/graphics/Bitmap";
const CONFIG_CLASS: &str = "android/graphics/Bitmap$Config";
const CONFIG_FIELD_SIG: &str = "Landroid/graphics/Bitmap$Config;";
const GET_CONFIG_SIG: &str = "()Landroid/graphics/Bitmap$Config;";
const CREATE_SIG: &str = "(IILandroid/graphics/Bitmap$Config;)Landroid/graphics/Bitmap;";

/// Borrowed handle to a host bitmap.
pub struct Bitmap<'e, E: HostEnv> {
    binding: ClassBinding<'e, E>,
    object: E::Object,
    get_width: E::Method,
    get_height: E::Method,
    get_config: E::Method,
    get_pixels: E::Method,
}

impl<'e, E: HostEnv> Bitmap<'e, E> {
    /// Wrap an existing bitmap object.
    pub fn from_object(env: &'e E, object: E::Object) -> Result<Self> {
        let binding = ClassBinding::resolve(env, CLASS)?;
        let get_width = binding.method("getWidth", "()I")?;
        let get_height = binding.method("getHeight", "()I")?;
        let get_config = binding.method("getConfig", GET_CONFIG_SIG)?;
        let get_pixels = binding.method("getPixels", "([IIIIIII)V")?;
        Ok(Self {
            binding,
            object,
            get_width,
            get_height,
            get_config,
            get_pixels,
        })
    }

    /// Ask the host for a fresh ARGB_8888 bitmap of the given size.
    pub fn create(env: &'e E, width: i32, height: i32) -> Result<Self> {
        let class = ClassBinding::resolve(env, CLASS)?;
        let config_class = ClassBinding::resolve(env, CONFIG_CLASS)?;
        let argb_8888 = config_class.static_field("ARGB_8888", CONFIG_FIELD_SIG)?;
        let config = env.static_object_field(config_class.class(), argb_8888)?;
        let create = class.static_method("createBitmap", CREATE_SIG)?;
        let object = env.call_static_object(
            class.class(),
            create,
            &[Arg::Int(width), Arg::Int(height), Arg::Object(config)],
        )?;
        Self::from_object(env, object)
    }

    pub fn width(&self) -> Result<i32> {
        self.binding
            .env()
            .call_int(self.object, self.get_width, &[])
    }

    pub fn height(&self) -> Result<i32> {
        self.binding
            .env()
            .call_int(self.object, self.get_height, &[])
    }

    /// The host's pixel-format object for this bitmap.
    pub fn config(&self) -> Result<E::Object> {
        self.binding
            .env()
            .call_object(self.object, self.get_config, &[])
    }

    /// Copy the bitmap's pixels into an owned RGBA buffer.
    ///
    /// The returned `Pixmap` holds exactly `width * 4 * height` bytes,
    /// row-major with no padding, and is released by ordinary ownership.
    pub fn pixels(&self) -> Result<Pixmap> {
        let env = self.binding.env();
        let width = self.width()?;
        let height = self.height()?;
        let (w, h) = (
            u32::try_from(width).map_err(|_| bad_dim("width", width))?,
            u32::try_from(height).map_err(|_| bad_dim("height", height))?,
        );

        let count = (w as usize) * (h as usize);
        let array = env.new_int_array(count as i32)?;
        env.call_void(
            self.object,
            self.get_pixels,
            &[
                Arg::Object(array),
                Arg::Int(0),
                Arg::Int(width),
                Arg::Int(0),
                Arg::Int(0),
                Arg::Int(width),
                Arg::Int(height),
            ],
        )?;

        let mut raw = vec![0i32; count];
        env.int_array_region(array, &mut raw)?;

        // Host pixels are packed ARGB ints; emit RGBA bytes.
        let mut data = Vec::with_capacity(count * 4);
        for px in raw {
            let [a, r, g, b] = px.to_be_bytes();
            data.extend_from_slice(&[r, g, b, a]);
        }
        Ok(Pixmap {
            width: w,
            height: h,
            data,
        })
    }

    pub fn object(&self) -> E::Object {
        self.object
    }
}

fn bad_dim(which: &str, value: i32) -> Error {
    Error::Render(format!("host bitmap reported {} {}", which, value))
}
