//! Built-in sample catalog
//!
//! Served when no API key is configured, and after a failed fetch when
//! `use_fallback_on_error` is set.

use crate::domain::product::{Product, ProductDraft};

struct SampleProduct {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    price: f64,
    image_url: &'static str,
    category: &'static str,
}

const SAMPLE_PRODUCTS: [SampleProduct; 8] = [
    SampleProduct {
        id: "mock-1",
        title: "Collar Artesanal Luna",
        description: "Hermoso collar hecho a mano con piedras naturales y dije de luna en plata 925",
        price: 8500.0,
        image_url: "https://images.unsplash.com/photo-1599643478518-a784e5dc4c8f?w=400&h=400&fit=crop",
        category: "Joyería",
    },
    SampleProduct {
        id: "mock-2",
        title: "Maceta Cerámica Mint",
        description: "Maceta de cerámica esmaltada en tono mint, perfecta para suculentas",
        price: 3200.0,
        image_url: "https://images.unsplash.com/photo-1485955900006-10f4d324d411?w=400&h=400&fit=crop",
        category: "Decoración",
    },
    SampleProduct {
        id: "mock-3",
        title: "Vela Aromática Lavanda",
        description: "Vela de soja con aceite esencial de lavanda. Duración: 40 horas",
        price: 4500.0,
        image_url: "https://images.unsplash.com/photo-1602874801006-96e1dde93fb5?w=400&h=400&fit=crop",
        category: "Hogar",
    },
    SampleProduct {
        id: "mock-4",
        title: "Tote Bag Algodón",
        description: "Bolso de algodón orgánico con estampado exclusivo. Resistente y ecológico",
        price: 2800.0,
        image_url: "https://images.unsplash.com/photo-1591561954557-26941169b49e?w=400&h=400&fit=crop",
        category: "Accesorios",
    },
    SampleProduct {
        id: "mock-5",
        title: "Set de Posavasos Corcho",
        description: "Set de 6 posavasos de corcho natural con diseños geométricos",
        price: 1900.0,
        image_url: "https://images.unsplash.com/photo-1615486511262-2e3797ba5d2c?w=400&h=400&fit=crop",
        category: "Decoración",
    },
    SampleProduct {
        id: "mock-6",
        title: "Aros Plata Minimal",
        description: "Aros de plata 925 con diseño minimalista. Incluye certificado de autenticidad",
        price: 6200.0,
        image_url: "https://images.unsplash.com/photo-1535632066927-ab7c9ab60908?w=400&h=400&fit=crop",
        category: "Joyería",
    },
    SampleProduct {
        id: "mock-7",
        title: "Cuaderno Artesanal",
        description: "Cuaderno con tapa dura y papel reciclado. 120 páginas",
        price: 2500.0,
        image_url: "https://images.unsplash.com/photo-1531346878377-a5be20888e57?w=400&h=400&fit=crop",
        category: "Papelería",
    },
    SampleProduct {
        id: "mock-8",
        title: "Jabón Natural Romero",
        description: "Jabón artesanal de glicerina con romero y carbón activado",
        price: 1200.0,
        image_url: "https://images.unsplash.com/photo-1611930022073-b7a4ba5fcccd?w=400&h=400&fit=crop",
        category: "Cosmética",
    },
];

/// The sample catalog, built through the regular entity constructor.
pub fn sample_products() -> Vec<Product> {
    SAMPLE_PRODUCTS
        .iter()
        .map(|sample| {
            Product::from(ProductDraft {
                id: Some(sample.id.to_string()),
                title: Some(sample.title.to_string()),
                description: Some(sample.description.to_string()),
                price: Some(sample.price),
                image_url: Some(sample.image_url.to_string()),
                category: Some(sample.category.to_string()),
            })
        })
        .filter(Product::is_valid)
        .collect()
}
