//! Static OpenSCAD reference data.
//!
//! All tables here are process-wide immutable constants: keys are stored
//! lowercase, declaration order is the presentation order for menus and
//! "available" listings, and lookups are total (absence is a valid outcome,
//! not an error).

pub const SYNTAX_RULES: &str = r#"
📝 OpenSCAD Language: Foundational Syntax and Rules

I. GENERAL LANGUAGE CHARACTERISTICS
OpenSCAD is a text-based, programmatic solid 3D CAD modeler, often described as "The Programmers Solid 3D CAD Modeller". The language is primarily declarative and utilizes modules (procedures) and functions (mathematical calculations) to build complex models.

Core Syntax Elements:
• Variable Assignment: var = value; (valid in any scope since version 2015.03)
• Conditional Assignment: var = condition? value_if_true : value_if_false;
• Function Definition: function name(arg1, arg2) = expression;
• Module Definition: module name(arg1, arg2) { ... }
• Import: include <file.scad> (copies global variables)
• Import: use <file.scad> (modules/functions only)

Scope and Variable Rules:
• Immutability/Overriding: Variables act like override-able constants
• Scope Restriction: Assignments don't leak to outer scopes
• Last Assignment Rule: Last assignment applies everywhere in scope
• Case Sensitivity: Function/module names are case sensitive

II. FLOW CONTROL SYNTAX
• Conditional: if(condition1) { ... } else if(condition2) { ... } else { ... }
• For Loop (Range): for (i = [start : increment : end]) { ... }
• For Loop (List): for (i = [list_of_values]) { ... }
• Intersection Loop: intersection_for (i = [1:6]) { ... }
• List Comprehensions: list = [ for (i = range) if (condition) i ];
"#;

pub const PRIMITIVES: &str = r"
🛠️ OpenSCAD Comprehensive Feature Reference - Primitives

3D PRIMITIVES:
• cube(size, center) or cube([w,d,h], center) - Rectangular prism
• sphere(r=radius) or sphere(d=diameter) - Spherical object
• cylinder(h, r|d, center) or cylinder(h, r1|d1, r2|d2, center) - Cylinder/frustum
• polyhedron(points, faces, convexity) - Complex 3D shape from points/faces

2D PRIMITIVES (lie in XY plane, require extrusion):
• circle(r=radius) or circle(d=diameter) - Planar circle
• square(size, center) or square([w,h], center) - Square/rectangle
• polygon([points], [paths]) - Planar shape from points
• text(t, size, font,...) - 2D text geometry (requires extrusion)
• projection(cut=true) - Projects 3D object to XY plane
";

pub const OPERATIONS: &str = r#"
⚙️ OpenSCAD CSG Operations and Transformations

CONSTRUCTIVE SOLID GEOMETRY (CSG):
• union() { obj1; obj2; } - Combines objects into single unified object
• difference() { base_obj; subtract_obj1; subtract_obj2; } - Removes subsequent objects from first
• intersection() { obj1; obj2; } - Creates object from shared volume only

TRANSFORMATIONS:
• translate([x,y,z]) { ... } - Moves child object by vector
• rotate([x,y,z]) { ... } or rotate(angle, [x,y,z]) { ... } - Rotates child object
• scale([x,y,z]) { ... } - Resizes along X, Y, and Z axes
• resize([x,y,z], auto=false, convexity) - Non-uniform scaling to fit dimensions
• mirror([x,y,z]) { ... } - Mirrors across plane defined by normal vector
• multmatrix(m) { ... } - Applies custom 4x4 transformation matrix

GEOMETRY OPERATIONS:
• hull() { obj1; obj2; } - Creates convex hull of all child objects
• minkowski(convexity) { obj1; obj2; } - Creates Minkowski sum
• offset(r|delta, chamfer) - Offsets edges of 2D shape or 3D surface
• linear_extrude(height, twist,...) - Extrudes 2D shape along straight path
• rotate_extrude(angle,...) - Rotates 2D shape around Z-axis
• surface(file="...", center, convexity) - Creates 3D surface from height-map
"#;

pub const SPECIAL_VARIABLES: &str = r#"
🎛️ OpenSCAD Special Variables and Modifiers

CIRCLE RESOLUTION VARIABLES:
• $fn = 0 - Fragments Number (sets segment count, overrides $fa/$fs if >0)
• $fa = 12 - Fragment Angle (minimum angle in degrees for segments)
• $fs = 2 - Fragment Size (minimum size for line segments)

DEBUGGING AND RENDERING MODIFIERS:
• # - Debug/Highlight: Shows object in transparent pink for visualization
• % - Background/Transparent: Shows in gray but ignores for CSG operations
• ! - Root/Show Only: Uses marked subtree as temporary design root
• * - Disable: Completely ignores marked subtree

OTHER SPECIAL VARIABLES:
• $children - Number of child nodes passed to current module
• $preview - Boolean: true in F5 preview, false in F6 render
• $t - Current animation step value for animations

UTILITY FUNCTIONS:
• echo("Variable Value:", my_var) - Diagnostic output to console
• assert(value > 0, "Value must be positive") - Condition checking
• children(0) - Returns first child object passed to module
• render() { complicated_object; } - Forces rendering operation
"#;

pub const BEST_PRACTICES: &str = r"
🏆 OpenSCAD Best Practices and Common Patterns

PARAMETERIZED DESIGN:
• Use variables for all dimensions to enable easy modifications
• Group related parameters at the top of files
• Use meaningful variable names (wall_thickness vs wt)

MODULE ORGANIZATION:
• Break complex designs into logical modules
• Use descriptive module names that indicate purpose
• Document module parameters and expected behavior

PERFORMANCE OPTIMIZATION:
• Use $fn sparingly - high values dramatically increase render time
• Prefer $fa and $fs for adaptive resolution
• Use render() for complex recursive operations
• Avoid excessive difference() operations with many children

DEBUGGING TECHNIQUES:
• Use # modifier to visualize intermediate steps
• Employ % to see reference geometry without affecting CSG
• Use echo() to output variable values during rendering
• Test modules in isolation before integration

STL EXPORT CONSIDERATIONS:
• Ensure manifold geometry (no holes or non-solid objects)
• Check normals are consistent for 3D printing
• Use sufficient resolution for intended print size
• Verify dimensions match expected real-world units
";

/// Detailed reference categories, in menu order.
pub const DETAILED_CATEGORIES: &[(&str, &str)] = &[
    ("syntax", SYNTAX_RULES),
    ("primitives", PRIMITIVES),
    ("operations", OPERATIONS),
    ("variables", SPECIAL_VARIABLES),
    ("bestpractices", BEST_PRACTICES),
];

/// Terse one-line references, a second tier disjoint from the detailed set.
pub const QUICK_CATEGORIES: &[(&str, &str)] = &[
    ("3d", "3D Primitives: cube(), sphere(), cylinder(), polyhedron()"),
    ("2d", "2D Primitives: circle(), square(), polygon(), text()"),
    (
        "transformations",
        "Transformations: translate(), rotate(), scale(), mirror(), resize()",
    ),
    ("boolean", "Boolean Operations: union(), difference(), intersection()"),
    ("extrusions", "Extrusions: linear_extrude(), rotate_extrude()"),
];

/// Quick-help topics with short usage snippets.
pub const QUICK_HELP_TOPICS: &[(&str, &str)] = &[
    (
        "cube",
        "cube(size, center) - Creates cube/rectangular prism\nExample: cube([10,20,5], center=true);",
    ),
    (
        "sphere",
        "sphere(r=radius) or sphere(d=diameter) - Creates sphere\nExample: sphere(r=10, $fn=50);",
    ),
    (
        "cylinder",
        "cylinder(h, r|d, center) - Creates cylinder/frustum\nExample: cylinder(h=20, r1=10, r2=5, center=true);",
    ),
    (
        "translate",
        "translate([x,y,z]) { ... } - Moves child object\nExample: translate([5,0,0]) cube(10);",
    ),
    (
        "rotate",
        "rotate([x,y,z]) { ... } - Rotates child object\nExample: rotate([0,0,45]) cube(10);",
    ),
    (
        "difference",
        "difference() { base; subtract1; subtract2; } - Boolean subtraction\nExample: difference() { cube(10); cylinder(h=15, r=3); }",
    ),
    (
        "module",
        "module name(params) { ... } - Defines reusable component\nExample: module box(size) { cube(size); }",
    ),
    (
        "extrude",
        "linear_extrude(height, twist, ...) { 2d_shape; } - Extrudes 2D to 3D\nExample: linear_extrude(10) circle(5);",
    ),
    (
        "variables",
        "Special variables: $fn, $fa, $fs for resolution\nModifiers: # (debug), % (background), ! (root), * (disable)",
    ),
];

/// Friendly display titles for detailed categories. Keys without an entry
/// fall back to the uppercased key.
const DISPLAY_NAMES: &[(&str, &str)] = &[
    ("syntax", "📝 Syntax and Rules"),
    ("primitives", "🛠️ Primitives"),
    ("operations", "⚙️ Operations and Transformations"),
    ("variables", "🎛️ Special Variables and Modifiers"),
    ("bestpractices", "🏆 Best Practices"),
];

/// One-line menu descriptions, one per category key across both tiers.
pub const CATEGORY_DESCRIPTIONS: &[(&str, &str)] = &[
    ("syntax", "Language syntax and rules"),
    ("primitives", "2D and 3D primitive shapes"),
    ("operations", "CSG operations and transformations"),
    ("variables", "Special variables and modifiers"),
    ("bestpractices", "Design patterns and optimization"),
    ("3d", "Quick 3D primitive reference"),
    ("2d", "Quick 2D primitive reference"),
    ("transformations", "Quick transformation reference"),
    ("boolean", "Quick boolean operations reference"),
    ("extrusions", "Quick extrusion operations reference"),
];

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, value)| *value)
}

/// Returns the body for a detailed category key, if known.
#[must_use]
pub fn detailed_category(key: &str) -> Option<&'static str> {
    lookup(DETAILED_CATEGORIES, key)
}

/// Returns the one-liner for a quick category key, if known.
#[must_use]
pub fn quick_category(key: &str) -> Option<&'static str> {
    lookup(QUICK_CATEGORIES, key)
}

/// Returns the snippet for a quick-help topic key, if known.
#[must_use]
pub fn quick_help_topic(key: &str) -> Option<&'static str> {
    lookup(QUICK_HELP_TOPICS, key)
}

/// Returns the friendly title for a detailed category key, if one exists.
#[must_use]
pub fn display_name(key: &str) -> Option<&'static str> {
    lookup(DISPLAY_NAMES, key)
}

/// All category keys, detailed tier first, in menu order.
pub fn category_keys() -> impl Iterator<Item = &'static str> {
    DETAILED_CATEGORIES
        .iter()
        .chain(QUICK_CATEGORIES.iter())
        .map(|(name, _)| *name)
}

/// All quick-help topic keys, in menu order.
pub fn topic_keys() -> impl Iterator<Item = &'static str> {
    QUICK_HELP_TOPICS.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_lowercase_and_unique() {
        let keys: Vec<&str> = category_keys().chain(topic_keys()).collect();
        for key in &keys {
            assert_eq!(*key, key.to_lowercase(), "key {key} must be lowercase");
        }

        let mut categories: Vec<&str> = category_keys().collect();
        categories.sort_unstable();
        categories.dedup();
        assert_eq!(categories.len(), DETAILED_CATEGORIES.len() + QUICK_CATEGORIES.len());
    }

    #[test]
    fn every_category_has_a_description() {
        for key in category_keys() {
            assert!(
                lookup(CATEGORY_DESCRIPTIONS, key).is_some(),
                "category {key} is missing a menu description"
            );
        }
    }

    #[test]
    fn display_names_cover_only_detailed_keys() {
        for (key, _) in DISPLAY_NAMES {
            assert!(detailed_category(key).is_some());
            assert!(quick_category(key).is_none());
        }
    }
}
